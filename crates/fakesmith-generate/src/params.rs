use fakesmith_core::FakeValue;

use crate::errors::GenerationError;

/// Positional arguments handed to a formatter.
///
/// Missing and `Null` arguments both read as absent so formatters can apply
/// their own defaults. Arguments that come from templates are text; the typed
/// accessors parse them on demand.
#[derive(Debug, Clone, Copy)]
pub struct Args<'a> {
    formatter: &'a str,
    values: &'a [FakeValue],
}

impl<'a> Args<'a> {
    pub fn new(formatter: &'a str, values: &'a [FakeValue]) -> Self {
        Self { formatter, values }
    }

    /// Name of the formatter being invoked.
    pub fn formatter(&self) -> &'a str {
        self.formatter
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &'a [FakeValue] {
        self.values
    }

    pub fn get(&self, idx: usize) -> Option<&'a FakeValue> {
        self.values.get(idx).filter(|value| !value.is_null())
    }

    pub fn get_str(&self, idx: usize) -> Option<&'a str> {
        self.get(idx).and_then(FakeValue::as_str)
    }

    /// Any non-null argument rendered as text.
    pub fn get_string(&self, idx: usize) -> Option<String> {
        self.get(idx).map(ToString::to_string)
    }

    pub fn get_i64(&self, idx: usize) -> Result<Option<i64>, GenerationError> {
        let Some(value) = self.get(idx) else {
            return Ok(None);
        };
        let parsed = match value {
            FakeValue::Int(value) => Some(*value),
            FakeValue::Float(value) if value.fract() == 0.0 => Some(*value as i64),
            FakeValue::Text(value) => value.trim().parse::<i64>().ok(),
            _ => None,
        };
        parsed
            .map(Some)
            .ok_or_else(|| self.invalid(idx, "an integer"))
    }

    pub fn get_u32(&self, idx: usize) -> Result<Option<u32>, GenerationError> {
        match self.get_i64(idx)? {
            None => Ok(None),
            Some(value) => u32::try_from(value)
                .map(Some)
                .map_err(|_| self.invalid(idx, "a non-negative integer")),
        }
    }

    pub fn get_f64(&self, idx: usize) -> Result<Option<f64>, GenerationError> {
        let Some(value) = self.get(idx) else {
            return Ok(None);
        };
        let parsed = match value {
            FakeValue::Text(value) => value.trim().parse::<f64>().ok(),
            other => other.as_f64(),
        };
        parsed.map(Some).ok_or_else(|| self.invalid(idx, "a number"))
    }

    /// Error for an argument of the wrong shape.
    pub fn invalid(&self, idx: usize, expected: &str) -> GenerationError {
        GenerationError::InvalidArgument(format!(
            "{}: argument {idx} must be {expected}",
            self.formatter
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_arguments_parse_as_numbers() {
        let values = vec![FakeValue::from("10"), FakeValue::from(" 2.5 ")];
        let args = Args::new("numberBetween", &values);
        assert_eq!(args.get_i64(0).ok().flatten(), Some(10));
        assert_eq!(args.get_f64(1).ok().flatten(), Some(2.5));
        assert!(args.get_i64(1).is_err());
    }

    #[test]
    fn null_and_missing_arguments_are_absent() {
        let values = vec![FakeValue::Null];
        let args = Args::new("name", &values);
        assert!(args.get(0).is_none());
        assert_eq!(args.get_i64(3).ok().flatten(), None);
        assert_eq!(args.get_str(0), None);
    }

    #[test]
    fn negative_values_are_not_u32() {
        let values = vec![FakeValue::Int(-1)];
        let args = Args::new("boolean", &values);
        assert!(matches!(
            args.get_u32(0),
            Err(GenerationError::InvalidArgument(_))
        ));
    }
}
