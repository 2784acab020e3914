#[macro_use]
mod macros;

setup_commands! {
    /// Print the build mode and the compiled-in API URL
    Show(show),
    /// Replace the API URL placeholder in release artifacts
    Substitute(substitute),
    /// Print auto-completion script for your shell init file
    GenerateShellCompletion(completion),
}
