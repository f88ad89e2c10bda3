//! Placeholder substitution.

/// Replaces each placeholder key with its value, in order.
///
/// Replacement is literal and sequential: every pair is applied to the
/// output of the previous one, so a value that contains a later key is
/// substituted again.
///
/// # Example
///
/// ```
/// use lingua_registry::substitute;
///
/// let text = substitute("Hello {name}", &[("{name}", "World")]);
/// assert_eq!(text, "Hello World");
/// ```
pub fn substitute(text: &str, placeholders: &[(&str, &str)]) -> String {
	let mut output = text.to_string();
	for (key, value) in placeholders {
		if key.is_empty() {
			continue;
		}
		output = output.replace(key, value);
	}
	output
}
