use std::fmt;

use crate::data_type::DataType;
use crate::error::InvalidDescriptionParameter;
use crate::notation::write_segments;
use crate::processor::{
    AffixPosition, CurrencyProcessor, NumberKind, NumberProcessor, PercentageProcessor,
};

/// A plain number description that a currency or percentage column can wrap.
pub trait NumberDescription: Clone + fmt::Debug + PartialEq {
    fn render<W: fmt::Write>(&self, out: &mut W) -> fmt::Result;

    fn number_processor(&self) -> NumberProcessor;
}

/// Numbers that may carry a currency symbol.
pub trait CurrencyNumber: NumberDescription {
    const CURRENCY_DATA_TYPE: DataType;
}

/// Numbers that may be written as a percentage.
pub trait PercentageNumber: NumberDescription {
    const PERCENTAGE_DATA_TYPE: DataType;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegerDescription {
    thousands_separator: Option<String>,
}

impl IntegerDescription {
    pub fn new(thousands_separator: Option<&str>) -> Result<Self, InvalidDescriptionParameter> {
        let thousands_separator = non_empty(thousands_separator);
        if let Some(sep) = thousands_separator.as_deref() {
            check_separator(DataType::Integer, "thousands separator", sep)?;
        }
        Ok(Self {
            thousands_separator,
        })
    }

    /// No thousands separator; renders as bare `integer`.
    pub fn canonical() -> Self {
        Self {
            thousands_separator: None,
        }
    }

    pub fn thousands_separator(&self) -> Option<&str> {
        self.thousands_separator.as_deref()
    }
}

impl NumberDescription for IntegerDescription {
    fn render<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        match self.thousands_separator.as_deref() {
            None => out.write_str("integer"),
            Some(sep) => write_segments(out, "integer", &[sep]),
        }
    }

    fn number_processor(&self) -> NumberProcessor {
        NumberProcessor::new(NumberKind::Integer, self.thousands_separator.clone(), None)
    }
}

impl CurrencyNumber for IntegerDescription {
    const CURRENCY_DATA_TYPE: DataType = DataType::CurrencyInteger;
}

macro_rules! fractional_description {
    ($(#[$meta:meta])* $name:ident, $data_type:ident, $type_name:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name {
            thousands_separator: Option<String>,
            decimal_separator: String,
        }

        impl $name {
            pub fn new(
                thousands_separator: Option<&str>,
                decimal_separator: &str,
            ) -> Result<Self, InvalidDescriptionParameter> {
                let thousands_separator = non_empty(thousands_separator);
                check_fractional_separators(
                    DataType::$data_type,
                    thousands_separator.as_deref(),
                    decimal_separator,
                )?;
                Ok(Self {
                    thousands_separator,
                    decimal_separator: decimal_separator.to_string(),
                })
            }

            /// No thousands separator, `.` as decimal separator.
            pub fn canonical() -> Self {
                Self {
                    thousands_separator: None,
                    decimal_separator: ".".to_string(),
                }
            }

            pub fn thousands_separator(&self) -> Option<&str> {
                self.thousands_separator.as_deref()
            }

            pub fn decimal_separator(&self) -> &str {
                &self.decimal_separator
            }
        }

        impl NumberDescription for $name {
            fn render<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
                write_segments(
                    out,
                    $type_name,
                    &[
                        self.thousands_separator.as_deref().unwrap_or(""),
                        self.decimal_separator.as_str(),
                    ],
                )
            }

            fn number_processor(&self) -> NumberProcessor {
                NumberProcessor::new(
                    NumberKind::$data_type,
                    self.thousands_separator.clone(),
                    Some(self.decimal_separator.clone()),
                )
            }
        }
    };
}

fractional_description!(
    /// Binary floating point numbers (`f64`).
    FloatDescription,
    Float,
    "float"
);
fractional_description!(
    /// Arbitrary-precision decimal numbers.
    DecimalDescription,
    Decimal,
    "decimal"
);

impl CurrencyNumber for DecimalDescription {
    const CURRENCY_DATA_TYPE: DataType = DataType::CurrencyDecimal;
}

impl PercentageNumber for FloatDescription {
    const PERCENTAGE_DATA_TYPE: DataType = DataType::PercentageFloat;
}

impl PercentageNumber for DecimalDescription {
    const PERCENTAGE_DATA_TYPE: DataType = DataType::PercentageDecimal;
}

/// A number with an optional currency symbol on a fixed side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyDescription<N> {
    position: AffixPosition,
    symbol: Option<String>,
    number: N,
}

impl<N: CurrencyNumber> CurrencyDescription<N> {
    pub fn new(
        position: AffixPosition,
        symbol: Option<&str>,
        number: N,
    ) -> Result<Self, InvalidDescriptionParameter> {
        let symbol = non_empty(symbol);
        if let Some(symbol) = symbol.as_deref() {
            check_affix(N::CURRENCY_DATA_TYPE, "currency symbol", symbol)?;
        }
        Ok(Self {
            position,
            symbol,
            number,
        })
    }

    /// Suffix position, no symbol.
    pub fn canonical_with(number: N) -> Self {
        Self {
            position: AffixPosition::Post,
            symbol: None,
            number,
        }
    }

    pub fn position(&self) -> AffixPosition {
        self.position
    }

    pub fn symbol(&self) -> Option<&str> {
        self.symbol.as_deref()
    }

    pub fn number(&self) -> &N {
        &self.number
    }

    pub(crate) fn render<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        write_segments(
            out,
            "currency",
            &[self.position.name(), self.symbol.as_deref().unwrap_or("")],
        )?;
        out.write_char('/')?;
        self.number.render(out)
    }

    pub(crate) fn processor(&self) -> CurrencyProcessor {
        CurrencyProcessor::new(self.position, self.symbol.clone(), self.number.number_processor())
    }
}

/// A number scaled by 100 and written with a percent sign.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PercentageDescription<N> {
    position: AffixPosition,
    sign: Option<String>,
    number: N,
}

impl<N: PercentageNumber> PercentageDescription<N> {
    pub fn new(
        position: AffixPosition,
        sign: Option<&str>,
        number: N,
    ) -> Result<Self, InvalidDescriptionParameter> {
        let sign = non_empty(sign);
        if let Some(sign) = sign.as_deref() {
            check_affix(N::PERCENTAGE_DATA_TYPE, "percentage sign", sign)?;
        }
        Ok(Self {
            position,
            sign,
            number,
        })
    }

    /// `%` after the number.
    pub fn canonical_with(number: N) -> Self {
        Self {
            position: AffixPosition::Post,
            sign: Some("%".to_string()),
            number,
        }
    }

    pub fn position(&self) -> AffixPosition {
        self.position
    }

    pub fn sign(&self) -> Option<&str> {
        self.sign.as_deref()
    }

    pub fn number(&self) -> &N {
        &self.number
    }

    pub(crate) fn render<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        write_segments(
            out,
            "percentage",
            &[self.position.name(), self.sign.as_deref().unwrap_or("")],
        )?;
        out.write_char('/')?;
        self.number.render(out)
    }

    pub(crate) fn processor(&self) -> PercentageProcessor {
        PercentageProcessor::new(self.position, self.sign.clone(), self.number.number_processor())
    }
}

fn non_empty(s: Option<&str>) -> Option<String> {
    s.filter(|s| !s.is_empty()).map(str::to_string)
}

fn check_separator(
    data_type: DataType,
    parameter: &'static str,
    sep: &str,
) -> Result<(), InvalidDescriptionParameter> {
    if sep.chars().any(|c| c.is_ascii_digit() || c == '+' || c == '-') {
        return Err(InvalidDescriptionParameter::new(
            data_type,
            parameter,
            format!("{sep:?} must not contain digits or signs"),
        ));
    }
    Ok(())
}

fn check_fractional_separators(
    data_type: DataType,
    thousands_separator: Option<&str>,
    decimal_separator: &str,
) -> Result<(), InvalidDescriptionParameter> {
    if decimal_separator.is_empty() {
        return Err(InvalidDescriptionParameter::new(
            data_type,
            "decimal separator",
            "must not be empty",
        ));
    }
    check_separator(data_type, "decimal separator", decimal_separator)?;
    if data_type == DataType::Float && decimal_separator.contains(['e', 'E']) {
        return Err(InvalidDescriptionParameter::new(
            data_type,
            "decimal separator",
            "must not contain an exponent marker",
        ));
    }
    if let Some(sep) = thousands_separator {
        check_separator(data_type, "thousands separator", sep)?;
        if sep.contains(decimal_separator) || decimal_separator.contains(sep) {
            return Err(InvalidDescriptionParameter::new(
                data_type,
                "thousands separator",
                format!("{sep:?} overlaps the decimal separator {decimal_separator:?}"),
            ));
        }
    }
    Ok(())
}

fn check_affix(
    data_type: DataType,
    parameter: &'static str,
    affix: &str,
) -> Result<(), InvalidDescriptionParameter> {
    if affix.chars().any(|c| c.is_ascii_digit()) {
        return Err(InvalidDescriptionParameter::new(
            data_type,
            parameter,
            format!("{affix:?} must not contain digits"),
        ));
    }
    Ok(())
}
