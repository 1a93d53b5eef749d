//! LaTeX-safe text escaping (§4.1, §9).
//!
//! A single character-by-character pass rather than chained `str::replace`
//! calls: chaining would re-scan text the earlier replacements already
//! introduced (e.g. a literal `%` replaced with `\%` would have its
//! backslash re-escaped by a later `\` rule), silently corrupting output.
//! One pass over the original characters sidesteps that entirely.
const RESERVED: [(char, &str); 10] = [
    ('\\', "\\textbackslash{}"),
    ('{', "\\{"),
    ('}', "\\}"),
    ('$', "\\$"),
    ('&', "\\&"),
    ('%', "\\%"),
    ('#', "\\#"),
    ('^', "\\textasciicircum{}"),
    ('_', "\\_"),
    ('~', "\\textasciitilde{}"),
];

/// Escape a display string for safe inclusion in LaTeX source.
pub fn escape_latex(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match RESERVED.iter().find(|(c, _)| *c == ch) {
            Some((_, replacement)) => out.push_str(replacement),
            None => out.push(ch),
        }
    }
    out
}
