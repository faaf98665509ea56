use std::fmt::Write;

/// Generates a query whose selection sets nest `depth` levels deep.
///
/// Each level selects an `id` leaf and an `items` field holding the
/// next level; the innermost set selects scalar leaves only. Depths
/// must stay below the parser's nesting limit of 64.
pub fn deeply_nested_query(depth: usize) -> String {
    let mut out = String::with_capacity(depth * 32);
    out.push_str("query DeeplyNested {\n");
    for level in 0..depth {
        let indent = "  ".repeat(level + 1);
        writeln!(out, "{indent}items {{").unwrap();
        writeln!(out, "{indent}  id").unwrap();
    }
    let inner_indent = "  ".repeat(depth + 1);
    writeln!(out, "{inner_indent}label").unwrap();
    for level in (0..depth).rev() {
        let indent = "  ".repeat(level + 1);
        writeln!(out, "{indent}}}").unwrap();
    }
    out.push_str("}\n");
    out
}

/// Generates a document containing `count` named query operations,
/// each with a variable, a directive, and an aliased field.
pub fn many_operations(count: usize) -> String {
    let mut out = String::with_capacity(count * 96);
    for index in 0..count {
        writeln!(out, "query Operation{index}($id: ID!) {{").unwrap();
        writeln!(out, "  node(id: $id) @include(if: true) {{").unwrap();
        writeln!(out, "    id").unwrap();
        writeln!(out, "    label{index}: name").unwrap();
        writeln!(out, "  }}").unwrap();
        writeln!(out, "}}\n").unwrap();
    }
    out
}
