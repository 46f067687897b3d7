/// A single tokenized OpenAir line
///
/// Each variant borrows the trimmed argument string of its line. Lines that
/// do not have the shape `<token> <argument>`, use an unknown token, or
/// contain characters outside the argument alphabet become
/// [`Command::Unrecognized`] and are skipped by the interpreter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    /// `AN`: airspace name
    Name(&'a str),
    /// `AC`: airspace class
    Class(&'a str),
    /// `AT`: airspace type, recognized but without effect
    Type(&'a str),
    /// `AL`: lower altitude limit
    Floor(&'a str),
    /// `AH`: upper altitude limit
    Ceiling(&'a str),
    /// `DC`: circle of the given radius around the current center
    Circle(&'a str),
    /// `DA`: arc given by radius and start/end headings
    Arc(&'a str),
    /// `DP`: single boundary point
    Point(&'a str),
    /// `DB`: arc between two points around the current center
    ArcBetween(&'a str),
    /// `V`: variable assignment (`D=` direction or center point)
    Variable(&'a str),
    /// `*`: comment that survived block grouping (indented marker)
    Comment(&'a str),
    /// Anything else, holding the whole trimmed line
    Unrecognized(&'a str),
}

impl<'a> Command<'a> {
    /// Tokenize one line
    ///
    /// Never fails: unknown input maps to [`Command::Unrecognized`].
    pub fn parse(line: &'a str) -> Self {
        let line = line.trim();

        if let Some(comment) = line.strip_prefix('*') {
            return Command::Comment(comment.trim_start());
        }

        let Some((token, args)) = line.split_once(char::is_whitespace) else {
            return Command::Unrecognized(line);
        };

        let args = args.trim();
        if !args.chars().all(is_argument_char) {
            return Command::Unrecognized(line);
        }

        match token {
            "AN" => Command::Name(args),
            "AC" => Command::Class(args),
            "AT" => Command::Type(args),
            "AL" => Command::Floor(args),
            "AH" => Command::Ceiling(args),
            "DC" => Command::Circle(args),
            "DA" => Command::Arc(args),
            "DP" => Command::Point(args),
            "DB" => Command::ArcBetween(args),
            "V" => Command::Variable(args),
            _ => Command::Unrecognized(line),
        }
    }
}

fn is_argument_char(c: char) -> bool {
    c.is_alphanumeric()
        || c.is_whitespace()
        || matches!(c, '_' | ':' | '.' | '=' | '+' | '-' | ',')
}
