// Shared prompt fragments and the template filler.
// Each pipeline keeps its own templates in assistant::prompts.

/// Formatting instructions appended to structured prompts. Replace `{schema}`.
pub const FORMAT_INSTRUCTIONS_TEMPLATE: &str = r#"The output should be formatted as a JSON instance that conforms to the JSON schema below.

As an example, for the schema {"properties": {"foo": {"title": "Foo", "description": "a list of strings", "type": "array", "items": {"type": "string"}}}, "required": ["foo"]}
the object {"foo": ["bar", "baz"]} is a well-formatted instance of the schema. The object {"properties": {"foo": ["bar", "baz"]}} is not well-formatted.

Here is the output schema:
```
{schema}
```"#;

/// Fills `{name}` placeholders in a single pass.
///
/// Substituted values are never rescanned, so user text containing `{...}` is left as-is.
/// Braces that do not enclose a known key are copied through unchanged.
pub fn render(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];

        let substitution = tail.find('}').and_then(|end| {
            let key = &tail[1..end];
            values
                .iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| (end, *value))
        });

        match substitution {
            Some((end, value)) => {
                out.push_str(value);
                rest = &tail[end + 1..];
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }

    out.push_str(rest);
    out
}
