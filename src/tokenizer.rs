use jieba_rs::Jieba;

/// Splits a sentence into the ordered word tokens a student types one by one.
pub trait Tokenizer {
    fn tokenize(&self, text: &str) -> Vec<String>;
}

/// Chinese word segmentation backed by the jieba dictionary. Whitespace tokens are dropped.
pub struct JiebaTokenizer {
    jieba: Jieba,
}

impl JiebaTokenizer {
    /// Loads the bundled dictionary. This takes a noticeable moment, so build one per run.
    pub fn new() -> Self {
        Self {
            jieba: Jieba::new(),
        }
    }
}

impl Default for JiebaTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer for JiebaTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        self.jieba
            .cut(text, true)
            .into_iter()
            .filter(|token| !token.trim().is_empty())
            .map(str::to_string)
            .collect()
    }
}
