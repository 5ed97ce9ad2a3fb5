//! Security policy section.
//!
//! Defaults are the platform's secure baseline, applied when a record omits
//! the section or any of its fields.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct Security {
    pub authentication: AuthenticationPolicy,
    pub encryption: EncryptionPolicy,
    pub audit: AuditPolicy,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AuthenticationPolicy {
    pub mfa_required: bool,
    pub password_policy: PasswordPolicy,
    pub session_timeout_minutes: u32,
    pub max_failed_attempts: u32,
    pub lockout_duration_minutes: u32,
}

impl Default for AuthenticationPolicy {
    fn default() -> Self {
        Self {
            mfa_required: true,
            password_policy: PasswordPolicy::default(),
            session_timeout_minutes: 30,
            max_failed_attempts: 3,
            lockout_duration_minutes: 15,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PasswordPolicy {
    pub min_length: u32,
    pub require_uppercase: bool,
    pub require_lowercase: bool,
    pub require_numbers: bool,
    pub require_special_chars: bool,
    pub max_age_days: u32,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: 12,
            require_uppercase: true,
            require_lowercase: true,
            require_numbers: true,
            require_special_chars: true,
            max_age_days: 90,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EncryptionPolicy {
    pub algorithm: String,
    pub key_rotation_days: u32,
    pub data_at_rest: bool,
    pub data_in_transit: bool,
}

impl Default for EncryptionPolicy {
    fn default() -> Self {
        Self {
            algorithm: "AES-256-GCM".to_string(),
            key_rotation_days: 90,
            data_at_rest: true,
            data_in_transit: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AuditPolicy {
    pub log_all_access: bool,
    pub retention_days: u32,
    pub real_time_alerts: bool,
}

impl Default for AuditPolicy {
    fn default() -> Self {
        Self {
            log_all_access: true,
            retention_days: 2555, // seven years
            real_time_alerts: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_section_keeps_secure_defaults() {
        let security: Security =
            serde_json::from_str(r#"{"encryption": {"dataAtRest": false}}"#).unwrap();
        assert!(!security.encryption.data_at_rest);
        assert!(security.encryption.data_in_transit);
        assert_eq!(security.encryption.algorithm, "AES-256-GCM");
        assert!(security.authentication.mfa_required);
        assert_eq!(security.authentication.password_policy.min_length, 12);
    }
}
