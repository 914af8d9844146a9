//! Task and file naming rules
//!
//! The `main` source set gets the short forms (`genXrunArgsFile`,
//! `xrun_args.f`); every other source set has its name spliced in
//! (`genTestXrunArgsFile`, `test_xrun_args.f`).

/// Names derived from a source set
#[derive(Debug, Clone, Copy)]
pub struct Names<'a> {
    source_set: Option<&'a str>,
}

impl<'a> Names<'a> {
    pub fn of(source_set: &'a str) -> Self {
        Self {
            source_set: (source_set != "main").then_some(source_set),
        }
    }

    fn words<'b>(&self, words: &[&'b str]) -> Vec<&'b str>
    where
        'a: 'b,
    {
        let mut all = Vec::with_capacity(words.len() + 1);
        all.push(words[0]);
        if let Some(source_set) = self.source_set {
            all.push(source_set);
        }
        all.extend_from_slice(&words[1..]);
        all
    }

    pub fn gen_args_file_task(&self, tool: &str) -> String {
        lower_camel_case(&self.words(&["gen", tool, "ArgsFile"]))
    }

    pub fn gen_full_args_file_task(&self, tool: &str) -> String {
        lower_camel_case(&self.words(&["genFull", tool, "ArgsFile"]))
    }

    pub fn args_file_name(&self, tool: &str) -> String {
        let mut words: Vec<&str> = self.source_set.into_iter().collect();
        words.extend([tool, "args.f"]);
        lower_snake_case(&words)
    }

    pub fn full_args_file_name(&self, tool: &str) -> String {
        lower_snake_case(&self.words(&["full", tool, "args.f"]))
    }
}

pub fn test_task_name(tool: &str) -> String {
    lower_camel_case(&["testWith", tool])
}

/// Join words into lowerCamelCase, keeping any inner capitals of each word
pub fn lower_camel_case(words: &[&str]) -> String {
    let mut result = String::new();
    for word in words.iter().filter(|w| !w.is_empty()) {
        let mut chars = word.chars();
        let Some(first) = chars.next() else { continue };
        if result.is_empty() {
            result.extend(first.to_lowercase());
        } else {
            result.extend(first.to_uppercase());
        }
        result.push_str(chars.as_str());
    }
    result
}

pub fn lower_snake_case(words: &[&str]) -> String {
    words
        .iter()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join("_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_source_set_names() {
        let names = Names::of("main");
        assert_eq!(names.gen_args_file_task("xrun"), "genXrunArgsFile");
        assert_eq!(names.gen_full_args_file_task("qrun"), "genFullQrunArgsFile");
        assert_eq!(names.args_file_name("Xrun"), "xrun_args.f");
        assert_eq!(names.full_args_file_name("xrun"), "full_xrun_args.f");
    }

    #[test]
    fn test_other_source_set_names() {
        let names = Names::of("test");
        assert_eq!(names.gen_args_file_task("xrun"), "genTestXrunArgsFile");
        assert_eq!(
            names.gen_full_args_file_task("qrun"),
            "genFullTestQrunArgsFile"
        );
        assert_eq!(names.args_file_name("xrun"), "test_xrun_args.f");
        assert_eq!(names.full_args_file_name("qrun"), "full_test_qrun_args.f");
    }

    #[test]
    fn test_test_task_name() {
        assert_eq!(test_task_name("xrun"), "testWithXrun");
    }

    #[test]
    fn test_lower_camel_case_skips_empty_words() {
        assert_eq!(lower_camel_case(&["", "Gen", "", "args"]), "genArgs");
    }
}
