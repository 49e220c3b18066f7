/// A variable declaration: its name without prefix and its value exactly as
/// written between the colon's trailing whitespace and the semicolon.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Variable {
    pub name: String,
    pub value: String,
}

impl Variable {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl<N: Into<String>, V: Into<String>> From<(N, V)> for Variable {
    fn from((name, value): (N, V)) -> Self {
        Self::new(name, value)
    }
}
