use nom::{
    branch::alt,
    bytes::complete::{is_not, tag},
    character::complete::{
        alpha1, alphanumeric1, char, digit1, multispace0, newline, none_of, one_of, space0,
    },
    combinator::{opt, recognize, value},
    multi::many0,
    sequence::{delimited, pair, preceded, terminated, tuple},
    IResult,
};

#[derive(Debug, PartialEq)]
pub struct TreeSource<'src> {
    pub tree_defs: Vec<TreeRootDef<'src>>,
}

#[derive(Debug, PartialEq)]
pub struct TreeRootDef<'src> {
    pub(crate) name: &'src str,
    pub(crate) root: NodeDef<'src>,
}

#[derive(Debug, PartialEq)]
pub struct NodeDef<'src> {
    pub(crate) name: &'src str,
    pub(crate) attrs: Vec<AttrDef<'src>>,
    pub(crate) children: Vec<NodeDef<'src>>,
}

impl<'src> NodeDef<'src> {
    #[allow(dead_code)]
    fn new(name: &'src str) -> Self {
        Self {
            name,
            attrs: vec![],
            children: vec![],
        }
    }

    #[allow(dead_code)]
    fn new_with_children(name: &'src str, children: Vec<NodeDef<'src>>) -> Self {
        Self {
            name,
            attrs: vec![],
            children,
        }
    }

    #[allow(dead_code)]
    fn new_with_attrs(name: &'src str, attrs: Vec<AttrDef<'src>>) -> Self {
        Self {
            name,
            attrs,
            children: vec![],
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct AttrDef<'src> {
    pub(crate) key: &'src str,
    pub(crate) value: Literal,
}

/// An attribute value literal, decoded into an owned value during
/// parsing.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

fn identifier(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        alt((alpha1, tag("_"))),
        many0(alt((alphanumeric1, tag("_")))),
    ))(input)
}

fn newlines(i: &str) -> IResult<&str, ()> {
    let (rest, _) = delimited(space0, one_of("\r\n"), multispace0)(i)?;
    Ok((rest, ()))
}

fn open_paren(i: &str) -> IResult<&str, ()> {
    value((), delimited(space0, char('('), space0))(i)
}

fn close_paren(i: &str) -> IResult<&str, ()> {
    value((), delimited(space0, char(')'), space0))(i)
}

fn open_brace(i: &str) -> IResult<&str, ()> {
    value((), delimited(space0, char('{'), space0))(i)
}

fn close_brace(i: &str) -> IResult<&str, ()> {
    value((), delimited(space0, char('}'), space0))(i)
}

fn line_comment<T>(i: &str) -> IResult<&str, Option<T>> {
    let (i, _) = tuple((space0, char('#'), opt(is_not("\n\r"))))(i)?;

    Ok((i, None))
}

fn some<I, R>(f: impl Fn(I) -> IResult<I, R>) -> impl Fn(I) -> IResult<I, Option<R>> {
    move |i| {
        let (i, res) = f(i)?;
        Ok((i, Some(res)))
    }
}

fn str_literal(input: &str) -> IResult<&str, Literal> {
    let (r, val) = delimited(
        preceded(space0, char('\"')),
        many0(none_of("\"")),
        terminated(char('"'), space0),
    )(input)?;
    Ok((
        r,
        Literal::Str(
            val.iter()
                .collect::<String>()
                .replace("\\\\", "\\")
                .replace("\\n", "\n"),
        ),
    ))
}

fn num_literal(i: &str) -> IResult<&str, Literal> {
    let (r, v) = recognize(tuple((
        opt(one_of("+-")),
        digit1,
        opt(preceded(char('.'), digit1)),
    )))(i)?;
    let lit = if v.contains('.') {
        Literal::Float(v.parse().map_err(|_| {
            nom::Err::Failure(nom::error::Error::new(i, nom::error::ErrorKind::Float))
        })?)
    } else {
        Literal::Int(v.parse().map_err(|_| {
            nom::Err::Failure(nom::error::Error::new(i, nom::error::ErrorKind::Digit))
        })?)
    };
    Ok((r, lit))
}

fn bool_literal(i: &str) -> IResult<&str, Literal> {
    alt((
        value(Literal::Bool(true), tag("true")),
        value(Literal::Bool(false), tag("false")),
    ))(i)
}

fn literal(i: &str) -> IResult<&str, Literal> {
    delimited(space0, alt((str_literal, num_literal, bool_literal)), space0)(i)
}

fn attr_def(i: &str) -> IResult<&str, AttrDef> {
    let (i, key) = delimited(space0, identifier, space0)(i)?;

    let (i, _) = delimited(space0, char('='), space0)(i)?;

    let (i, value) = literal(i)?;

    Ok((i, AttrDef { key, value }))
}

fn attr_defs(i: &str) -> IResult<&str, Vec<AttrDef>> {
    many0(delimited(
        multispace0,
        attr_def,
        many0(pair(multispace0, char(','))),
    ))(i)
}

fn tree_children(i: &str) -> IResult<&str, Vec<NodeDef>> {
    let (i, _) = many0(newlines)(i)?;

    let (i, v) = many0(delimited(
        space0,
        alt((line_comment, some(parse_tree_node))),
        many0(newlines),
    ))(i)?;

    let (i, _) = many0(newlines)(i)?;

    Ok((i, v.into_iter().flatten().collect()))
}

fn parse_tree_node(i: &str) -> IResult<&str, NodeDef> {
    let (i, name) = delimited(space0, identifier, space0)(i)?;

    let (i, attrs) = opt(delimited(open_paren, attr_defs, close_paren))(i)?;

    let (i, children) = opt(delimited(open_brace, tree_children, close_brace))(i)?;

    let (i, _) = opt(line_comment::<NodeDef>)(i)?;

    Ok((
        i,
        NodeDef {
            name,
            attrs: attrs.unwrap_or_default(),
            children: children.unwrap_or_default(),
        },
    ))
}

fn parse_tree(i: &str) -> IResult<&str, TreeRootDef> {
    let (i, _) = delimited(multispace0, tag("tree"), space0)(i)?;

    let (i, name) = delimited(space0, identifier, space0)(i)?;

    let (i, _) = delimited(space0, tag("="), space0)(i)?;

    let (i, root) = parse_tree_node(i)?;

    Ok((i, TreeRootDef { name, root }))
}

/// Parses a whole source file into an AST. Note that the AST borrows the
/// argument string, so the source must outlive it.
pub fn parse_file(i: &str) -> IResult<&str, TreeSource> {
    let (i, trees) = many0(alt((
        delimited(multispace0, line_comment, newline),
        some(parse_tree),
    )))(i)?;

    // Eat up trailing whitespace to indicate that the input was thoroughly consumed
    let (i, _) = multispace0(i)?;

    Ok((
        i,
        TreeSource {
            tree_defs: trees.into_iter().flatten().collect(),
        },
    ))
}

#[cfg(test)]
mod test;
