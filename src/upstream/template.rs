/// Replaces every occurrence of `{i}` in the template with the i-th
/// argument. Arguments whose index never appears are skipped silently; a
/// template without matching placeholders comes back unchanged.
pub fn format_positional(template: &str, args: &[&str]) -> String {
    let mut out = template.to_string();

    for (i, arg) in args.iter().enumerate() {
        out = out.replace(&format!("{{{}}}", i), arg);
    }

    out
}
