use std::{
    error::Error,
    fmt::{Display, Formatter, Result},
};

pub mod logger;
pub mod tpl;

#[derive(Debug)]
pub enum TextIntpError {
    InvalidInput(String),
    NoSubstitutions(String),
}

impl Error for TextIntpError {}

impl Display for TextIntpError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let msg = match self {
            TextIntpError::InvalidInput(err) => format!("(Input) {err}"),
            TextIntpError::NoSubstitutions(err) => format!("(Substitutions) {err}"),
        };

        write!(f, "{msg}")?;
        Ok(())
    }
}
