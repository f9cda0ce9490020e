//! Display helper functions for list rows and dimension labels

use shared::Dimensions;

/// Object list entry
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListRow {
    pub label: String,
}

/// Format dimensions as `W x H x D`
pub fn format_dimensions(dims: Dimensions, precision: usize) -> String {
    format!(
        "{:.p$} x {:.p$} x {:.p$}",
        dims.width,
        dims.height,
        dims.depth,
        p = precision
    )
}

/// Label shown in the object list
pub fn row_label(name: &str, dims: Dimensions, precision: usize) -> String {
    format!("{} ({})", name, format_dimensions(dims, precision))
}

/// Get shortened ID (first 8 characters)
pub fn short_id(id: &str) -> &str {
    match id.char_indices().nth(8) {
        Some((i, _)) => &id[..i],
        None => id,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_dimensions() {
        let d = Dimensions::new(1.0, 2.4, 0.126);
        assert_eq!(format_dimensions(d, 2), "1.00 x 2.40 x 0.13");
        assert_eq!(format_dimensions(d, 0), "1 x 2 x 0");
    }

    #[test]
    fn test_row_label() {
        let d = Dimensions::new(1.0, 1.0, 1.0);
        assert_eq!(row_label("Object 1", d, 1), "Object 1 (1.0 x 1.0 x 1.0)");
    }

    #[test]
    fn test_short_id() {
        assert_eq!(short_id("0123456789"), "01234567");
        assert_eq!(short_id("abc"), "abc");
    }
}
