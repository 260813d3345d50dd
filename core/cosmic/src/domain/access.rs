//! 管理画面の入場コード（固定文字列との比較のみ）

use common::error::Error;

const ACCESS_CODES: [&str; 2] = ["cosmos", "admin"];

pub fn check_access_code(code: &str) -> Result<(), Error> {
    if ACCESS_CODES.contains(&code) {
        Ok(())
    } else {
        Err(Error::invalid_argument("Invalid Access Code"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes() {
        assert!(check_access_code("cosmos").is_ok());
        assert!(check_access_code("admin").is_ok());
    }

    #[test]
    fn test_comparison_is_literal() {
        for code in ["", "Cosmos", " admin", "admin ", "stars"] {
            let err = check_access_code(code).unwrap_err();
            assert_eq!(err.to_string(), "Invalid Access Code");
        }
    }
}
