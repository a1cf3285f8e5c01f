use std::ffi::OsString;

/// Command-line tokens as text. Bytes that are not valid UTF-8 become
/// U+FFFD so a bad token is still validated and reported, never a panic.
pub fn collect_args<I>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect()
}
