use serde::{Deserialize, Serialize};

/// Запрошенные/измеренные габариты объекта
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
}

impl Dimensions {
    pub fn new(width: f64, height: f64, depth: f64) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }

    pub fn from_array(v: [f64; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }

    pub fn to_array(self) -> [f64; 3] {
        [self.width, self.height, self.depth]
    }

    /// Все три значения должны быть конечными и строго положительными
    pub fn validate(&self) -> Result<(), DimensionError> {
        for (field, value) in DimensionField::ALL.iter().zip(self.to_array()) {
            check_value(*field, value)?;
        }
        Ok(())
    }

    /// Разобрать три текстовых поля (ширина, высота, глубина)
    pub fn parse(fields: [&str; 3]) -> Result<Self, DimensionError> {
        let width = parse_dimension(DimensionField::Width, fields[0])?;
        let height = parse_dimension(DimensionField::Height, fields[1])?;
        let depth = parse_dimension(DimensionField::Depth, fields[2])?;
        Ok(Self::new(width, height, depth))
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }
}

/// Поле ввода габарита
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DimensionField {
    Width,
    Height,
    Depth,
}

impl DimensionField {
    pub const ALL: [DimensionField; 3] = [
        DimensionField::Width,
        DimensionField::Height,
        DimensionField::Depth,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DimensionField::Width => "width",
            DimensionField::Height => "height",
            DimensionField::Depth => "depth",
        }
    }
}

/// Ошибки ввода габаритов
#[derive(Debug, Clone, PartialEq)]
pub enum DimensionError {
    /// Пустое поле
    Empty(DimensionField),
    /// Не удалось вычислить числовое значение
    NotNumeric { field: DimensionField, input: String },
    /// Значение не положительное
    NotPositive { field: DimensionField, value: f64 },
    /// Значение не помещается в f32 (бесконечность, NaN, переполнение)
    OutOfRange { field: DimensionField, value: f64 },
}

impl std::fmt::Display for DimensionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DimensionError::Empty(field) => write!(f, "Missing {}", field.label()),
            DimensionError::NotNumeric { field, input } => {
                write!(f, "Invalid {}: '{}' is not a number", field.label(), input)
            }
            DimensionError::NotPositive { field, value } => {
                write!(f, "Invalid {}: {} must be greater than zero", field.label(), value)
            }
            DimensionError::OutOfRange { field, value } => {
                write!(f, "Invalid {}: {} is out of range", field.label(), value)
            }
        }
    }
}

impl std::error::Error for DimensionError {}

/// Разобрать одно поле. Допускаются простые выражения ("2*0.5", "1.2+0.3").
pub fn parse_dimension(field: DimensionField, input: &str) -> Result<f64, DimensionError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(DimensionError::Empty(field));
    }

    let value = evalexpr::eval_number(trimmed).map_err(|_| DimensionError::NotNumeric {
        field,
        input: trimmed.to_string(),
    })?;

    check_value(field, value)
}

/// Геометрия хранится в f32: значение должно остаться конечным и ненулевым после приведения
fn check_value(field: DimensionField, value: f64) -> Result<f64, DimensionError> {
    if value <= 0.0 {
        return Err(DimensionError::NotPositive { field, value });
    }
    let single = value as f32;
    if !value.is_finite() || !single.is_finite() || single <= 0.0 {
        return Err(DimensionError::OutOfRange { field, value });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_number() {
        assert_eq!(parse_dimension(DimensionField::Width, "1.5"), Ok(1.5));
        assert_eq!(parse_dimension(DimensionField::Width, " 2 "), Ok(2.0));
    }

    #[test]
    fn test_parse_expression() {
        let v = parse_dimension(DimensionField::Height, "2*0.25").unwrap();
        assert!((v - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(
            parse_dimension(DimensionField::Depth, "   "),
            Err(DimensionError::Empty(DimensionField::Depth))
        );
    }

    #[test]
    fn test_parse_not_numeric() {
        let err = parse_dimension(DimensionField::Width, "abc").unwrap_err();
        assert!(matches!(err, DimensionError::NotNumeric { .. }));
    }

    #[test]
    fn test_parse_rejects_zero_and_negative() {
        assert!(matches!(
            parse_dimension(DimensionField::Width, "0"),
            Err(DimensionError::NotPositive { .. })
        ));
        assert!(matches!(
            parse_dimension(DimensionField::Width, "-1"),
            Err(DimensionError::NotPositive { .. })
        ));
    }

    #[test]
    fn test_parse_all_fields_reports_first_error() {
        let err = Dimensions::parse(["1", "x", "0"]).unwrap_err();
        assert!(matches!(
            err,
            DimensionError::NotNumeric {
                field: DimensionField::Height,
                ..
            }
        ));
    }

    #[test]
    fn test_validate() {
        assert!(Dimensions::new(1.0, 2.0, 3.0).validate().is_ok());
        assert!(Dimensions::new(1.0, 0.0, 3.0).validate().is_err());
        assert!(Dimensions::new(f64::NAN, 1.0, 1.0).validate().is_err());
    }

    #[test]
    fn test_validate_rejects_values_outside_f32() {
        assert!(matches!(
            Dimensions::new(1e39, 1.0, 1.0).validate(),
            Err(DimensionError::OutOfRange {
                field: DimensionField::Width,
                ..
            })
        ));
        assert!(matches!(
            Dimensions::new(1.0, 1e-50, 1.0).validate(),
            Err(DimensionError::OutOfRange {
                field: DimensionField::Height,
                ..
            })
        ));
        assert!(matches!(
            Dimensions::new(1.0, 1.0, f64::INFINITY).validate(),
            Err(DimensionError::OutOfRange { .. })
        ));
        assert!(Dimensions::new(1e30, 1e-30, 1.0).validate().is_ok());
    }

    #[test]
    fn test_parse_rejects_overflowing_expression() {
        let err = parse_dimension(
            DimensionField::Depth,
            "100000000000000000000.0 * 100000000000000000000.0",
        )
        .unwrap_err();
        assert!(matches!(err, DimensionError::OutOfRange { .. }));
    }

    #[test]
    fn test_error_display() {
        let err = DimensionError::NotPositive {
            field: DimensionField::Depth,
            value: -2.0,
        };
        assert_eq!(err.to_string(), "Invalid depth: -2 must be greater than zero");
    }
}
