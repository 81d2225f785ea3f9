/// Numeral system a value is read in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Base {
    #[default]
    Decimal,
    Binary,
    Octal,
    Hexadecimal,
}

impl Base {
    /// Selector order.
    pub const ALL: [Base; 4] = [Base::Decimal, Base::Binary, Base::Octal, Base::Hexadecimal];

    pub fn radix(self) -> u32 {
        match self {
            Base::Decimal => 10,
            Base::Binary => 2,
            Base::Octal => 8,
            Base::Hexadecimal => 16,
        }
    }

    /// Literal prefix accepted in front of the digits, if the base has one.
    pub fn prefix(self) -> Option<&'static str> {
        match self {
            Base::Decimal => None,
            Base::Binary => Some("0b"),
            Base::Octal => Some("0o"),
            Base::Hexadecimal => Some("0x"),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Base::Decimal => "Decimal",
            Base::Binary => "Binary",
            Base::Octal => "Octal",
            Base::Hexadecimal => "Hexadecimal",
        }
    }
}

impl std::fmt::Display for Base {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
