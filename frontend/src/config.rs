//! Build-time settings, read from the environment `trunk build` runs in.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

impl Environment {
    fn parse(value: Option<&str>) -> Self {
        match value {
            Some("development") | None => Environment::Development,
            Some("staging") => Environment::Staging,
            Some(_) => Environment::Production,
        }
    }
}

pub fn environment() -> Environment {
    Environment::parse(option_env!("LEXIA_ENVIRONMENT"))
}

pub fn log_level() -> log::Level {
    match environment() {
        Environment::Development => log::Level::Debug,
        Environment::Staging | Environment::Production => log::Level::Info,
    }
}

/// Lead intake URL. Unset or empty means registrations are simulated.
pub fn lead_endpoint() -> Option<&'static str> {
    option_env!("LEXIA_LEAD_ENDPOINT").filter(|url| !url.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_environment_is_treated_as_production() {
        assert_eq!(Environment::parse(None), Environment::Development);
        assert_eq!(Environment::parse(Some("staging")), Environment::Staging);
        assert_eq!(Environment::parse(Some("prod")), Environment::Production);
    }
}
