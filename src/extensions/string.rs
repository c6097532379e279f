pub trait ToChoiceKey {
    /// Menu selection form of an input line: surrounding whitespace trimmed
    /// and ASCII letters lowercased.
    fn to_choice_key(&self) -> String;
}

impl ToChoiceKey for str {
    fn to_choice_key(&self) -> String {
        self.trim().to_ascii_lowercase()
    }
}

impl ToChoiceKey for String {
    fn to_choice_key(&self) -> String {
        self.as_str().to_choice_key()
    }
}
