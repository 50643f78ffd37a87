mod loader;
mod nom_parser;
mod yaml_parser;

pub use self::{
    loader::{load, load_tree},
    nom_parser::{parse_file, AttrDef, Literal, NodeDef, TreeRootDef, TreeSource},
    yaml_parser::load_yaml,
};
