//! Position unit tests

use crate::util::span::Position;

#[cfg(test)]
mod position_tests {
    use super::*;

    #[test]
    fn test_position_creation() {
        let pos = Position::new(1, 5);
        assert_eq!(pos.line, 1);
        assert_eq!(pos.column, 5);
        assert_eq!(pos.offset, 4);
    }

    #[test]
    fn test_position_with_offset() {
        let pos = Position::with_offset(1, 5, 100);
        assert_eq!(pos.line, 1);
        assert_eq!(pos.column, 5);
        assert_eq!(pos.offset, 100);
    }

    #[test]
    fn test_position_at_offset() {
        let pos = Position::at(3, 0);
        assert_eq!(pos, Position::with_offset(3, 1, 0));
    }

    #[test]
    fn test_position_dummy() {
        let pos = Position::dummy();
        assert!(pos.is_dummy());
        assert!(!Position::new(1, 1).is_dummy());
    }

    #[test]
    fn test_position_shifted() {
        let pos = Position::at(2, 4).shifted(3);
        assert_eq!(pos.line, 2);
        assert_eq!(pos.column, 8);
        assert_eq!(pos.offset, 7);
    }

    #[test]
    fn test_position_display() {
        let pos = Position::new(10, 20);
        assert_eq!(format!("{}", pos), "10:20");
    }

    #[test]
    fn test_position_serializes_as_object() {
        let json = serde_json::to_string(&Position::at(1, 2)).unwrap();
        assert_eq!(json, r#"{"line":1,"column":3,"offset":2}"#);
    }
}
