/// The naming convention separating hook scripts from everything else in the
/// hooks directory: a hook has no `.` anywhere in its file name.
///
/// `pre-commit` is a hook; `pre-commit.sample`, `README.md`, and hidden files
/// like `.keep` are not. The rule is deliberately literal — a dot anywhere in
/// the name excludes the entry, not just a trailing extension.
pub fn is_hook_name(name: &str) -> bool {
    !name.is_empty() && !name.contains('.')
}
