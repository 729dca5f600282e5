/// The five scalar types every schema provides implicitly.
pub const GRAPHQL_SPECIFIED_SCALARS: [&str; 5] =
    ["Boolean", "Float", "ID", "Int", "String"];

pub fn is_graphql_specified_scalar(name: &str) -> bool {
    GRAPHQL_SPECIFIED_SCALARS.contains(&name)
}
