use std::fmt::{self, Display, Formatter};

#[derive(Debug)]
#[non_exhaustive]
pub enum CompileError {
    DuplicateNodeId(String),
}

impl Display for CompileError {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        match self {
            Self::DuplicateNodeId(id) => {
                write!(fmt, "Node id {:?} is used more than once", id)
            }
        }
    }
}

impl std::error::Error for CompileError {}

#[derive(Debug)]
#[non_exhaustive]
pub enum RegisterError {
    ReservedName(String),
    InvalidName(String),
}

impl Display for RegisterError {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        match self {
            Self::ReservedName(name) => {
                write!(fmt, "{:?} is a built-in node name and cannot be an action", name)
            }
            Self::InvalidName(name) => {
                write!(fmt, "{:?} is not a valid action name", name)
            }
        }
    }
}

impl std::error::Error for RegisterError {}

#[derive(Debug)]
#[non_exhaustive]
pub enum UpdateError {
    UnknownAction(String),
}

impl Display for UpdateError {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        match self {
            Self::UnknownAction(name) => {
                write!(fmt, "No action is registered under the name {:?}", name)
            }
        }
    }
}

impl std::error::Error for UpdateError {}

#[derive(Debug)]
#[non_exhaustive]
pub enum LoadError {
    MissingTree(String),
    InvalidNodeId { node: String },
    Compile(CompileError),
}

impl Display for LoadError {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        match self {
            Self::MissingTree(name) => {
                write!(fmt, "Tree {:?} does not exist in the source", name)
            }
            Self::InvalidNodeId { node } => {
                write!(fmt, "The id attribute of node {:?} must be a string literal", node)
            }
            Self::Compile(e) => e.fmt(fmt),
        }
    }
}

impl std::error::Error for LoadError {}

impl From<CompileError> for LoadError {
    fn from(err: CompileError) -> Self {
        Self::Compile(err)
    }
}

#[derive(Debug)]
pub enum LoadYamlError {
    Yaml(serde_yaml::Error),
    Compile(CompileError),
}

impl Display for LoadYamlError {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        match self {
            Self::Yaml(e) => e.fmt(fmt),
            Self::Compile(e) => e.fmt(fmt),
        }
    }
}

impl std::error::Error for LoadYamlError {}

impl From<serde_yaml::Error> for LoadYamlError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err)
    }
}

impl From<CompileError> for LoadYamlError {
    fn from(err: CompileError) -> Self {
        Self::Compile(err)
    }
}
