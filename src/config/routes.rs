//! Redirect destinations

use serde::Deserialize;

use super::error::ValidationError;
use crate::application::Destinations;

/// Where guarded routes send users who may not see them.
#[derive(Debug, Clone, Deserialize)]
pub struct RoutesConfig {
    #[serde(default = "default_sign_in_path")]
    pub sign_in_path: String,

    #[serde(default = "default_applicant_home")]
    pub applicant_home: String,

    #[serde(default = "default_recruiter_home")]
    pub recruiter_home: String,
}

impl RoutesConfig {
    pub fn destinations(&self) -> Destinations {
        Destinations {
            sign_in: self.sign_in_path.clone(),
            applicant_home: self.applicant_home.clone(),
            recruiter_home: self.recruiter_home.clone(),
        }
    }

    /// Every destination must be an absolute path.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let paths = [
            ("ROUTES__SIGN_IN_PATH", &self.sign_in_path),
            ("ROUTES__APPLICANT_HOME", &self.applicant_home),
            ("ROUTES__RECRUITER_HOME", &self.recruiter_home),
        ];
        for (name, path) in paths {
            if !path.starts_with('/') {
                return Err(ValidationError::InvalidRoutePath(name));
            }
        }
        Ok(())
    }
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            sign_in_path: default_sign_in_path(),
            applicant_home: default_applicant_home(),
            recruiter_home: default_recruiter_home(),
        }
    }
}

fn default_sign_in_path() -> String {
    "/auth".to_string()
}

fn default_applicant_home() -> String {
    "/applicant/dashboard".to_string()
}

fn default_recruiter_home() -> String {
    "/recruiter/dashboard".to_string()
}
