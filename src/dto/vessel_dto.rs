use serde::Deserialize;
use validator::Validate;

// Request para registrar un buque
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVesselRequest {
    #[validate(required, length(min = 1, max = 8))]
    pub code: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_rules() {
        let ok = CreateVesselRequest { code: Some("MV102".to_string()) };
        assert!(ok.validate().is_ok());

        let missing = CreateVesselRequest { code: None };
        assert!(missing.validate().is_err());

        let empty = CreateVesselRequest { code: Some(String::new()) };
        assert!(empty.validate().is_err());

        let too_long = CreateVesselRequest { code: Some("123456789".to_string()) };
        assert!(too_long.validate().is_err());
    }
}
