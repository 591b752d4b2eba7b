use clap::Parser;

/// Words starting with this prefix are tags.
pub const TAG_PREFIX: char = '@';

#[derive(Parser, Debug)]
#[command(
    name = "sun",
    about = "Keep a log of what you are doing, one short note at a time",
    override_usage = "sun [OPTIONS] [sentence describing activity to note, words beginning with an @ are taken to be tags]",
    after_help = "If no arguments are given, a table with the latest notes is shown.",
    disable_version_flag = true
)]
pub struct Cli {
    /// Show version and exit
    #[arg(short = 'v', long = "version")]
    pub version: bool,

    /// The note; words beginning with an @ are tags
    #[arg(value_name = "WORDS", trailing_var_arg = true)]
    pub words: Vec<String>,
}

/// What a single invocation does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Version,
    Read,
    Write { note: String, tags: Vec<String> },
}

impl Cli {
    pub fn action(&self) -> Action {
        if self.version {
            Action::Version
        } else if self.words.is_empty() {
            Action::Read
        } else {
            let (tags, note) = tokenize(&self.words);
            Action::Write { note, tags }
        }
    }
}

/// Splits the arguments into sorted tags and the note text.
///
/// Every argument is split on whitespace. Fields starting with
/// [`TAG_PREFIX`] become tags with the prefix removed; the remaining fields
/// are joined with single spaces.
pub fn tokenize<S: AsRef<str>>(args: &[S]) -> (Vec<String>, String) {
    let mut tags = Vec::new();
    let mut words = Vec::new();

    for field in args.iter().flat_map(|arg| arg.as_ref().split_whitespace()) {
        match field.strip_prefix(TAG_PREFIX) {
            Some(tag) => tags.push(tag.to_string()),
            None => words.push(field),
        }
    }

    tags.sort();
    (tags, words.join(" "))
}
