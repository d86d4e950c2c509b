use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    tarman completions bash > ~/.bash_completion.d/tarman\n\n\
                  Generate zsh completions:\n    tarman completions zsh > ~/.zfunc/_tarman\n\n\
                  Generate fish completions:\n    tarman completions fish > ~/.config/fish/completions/tarman.fish\n\n\
                  Generate PowerShell completions:\n    tarman completions powershell")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
