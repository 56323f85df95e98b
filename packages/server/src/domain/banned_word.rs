//! 禁止ワードリスト
//!
//! 表示名と投稿テキストのフィルタに使う部分文字列の集合。
//!
//! - 照合は大文字小文字を区別しない部分一致（単語単位ではない）
//! - 重複判定は大文字小文字を区別する完全一致
//!
//! 2 つの判定で大文字小文字の扱いが異なる。`"Baka"` は `"baka"` が登録済みでも
//! 追加でき、どちらも同じテキストに一致する。

use super::value_object::BannedWord;

/// 検証・重複排除済みの禁止ワードリスト（追加順を保持）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BannedWordList {
    words: Vec<String>,
    /// `words` を小文字化したもの（照合用）
    lowered: Vec<String>,
}

impl BannedWordList {
    pub fn new() -> Self {
        Self::default()
    }

    /// 永続化ストアから読み込んだ生データからリストを構築する
    ///
    /// 空白のみのエントリは捨て、完全一致の重複は最初の 1 件だけ残す。
    pub fn from_loaded(raw: Vec<String>) -> Self {
        let mut list = Self::new();
        for word in raw {
            if let Ok(word) = BannedWord::new(word) {
                if !list.contains_exact(word.as_str()) {
                    list.push(word);
                }
            }
        }
        list
    }

    /// `text` がいずれかの禁止ワードを含むか（大文字小文字を区別しない）
    pub fn matches(&self, text: &str) -> bool {
        let text = text.to_lowercase();
        self.lowered.iter().any(|word| text.contains(word.as_str()))
    }

    /// 完全に同じ文字列が登録済みか（大文字小文字を区別する）
    pub fn contains_exact(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    /// 末尾に追加する。重複チェックは呼び出し側の責務。
    pub fn push(&mut self, word: BannedWord) {
        let word = word.into_string();
        self.lowered.push(word.to_lowercase());
        self.words.push(word);
    }

    pub fn as_slice(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_of(words: &[&str]) -> BannedWordList {
        BannedWordList::from_loaded(words.iter().map(|w| w.to_string()).collect())
    }

    #[test]
    fn test_matches_is_case_insensitive_substring() {
        // テスト項目: 大文字小文字を区別せず、部分一致で照合される
        // given (前提条件):
        let list = list_of(&["baka"]);

        // when (操作):
        let upper = list.matches("BAKA");
        let embedded = list.matches("xxBaKaxx");
        let unrelated = list.matches("sakura");

        // then (期待する結果):
        assert!(upper);
        assert!(embedded);
        assert!(!unrelated);
    }

    #[test]
    fn test_matches_stored_word_with_uppercase() {
        // テスト項目: 大文字を含む禁止ワードも小文字のテキストに一致する
        // given (前提条件):
        let list = list_of(&["BaKa"]);

        // when (操作):
        let result = list.matches("baka");

        // then (期待する結果):
        assert!(result);
    }

    #[test]
    fn test_matches_japanese_substring() {
        // テスト項目: 日本語の部分文字列も一致する
        // given (前提条件):
        let list = list_of(&["ばか"]);

        // when (操作):
        let result = list.matches("おおばかもの");

        // then (期待する結果):
        assert!(result);
    }

    #[test]
    fn test_empty_list_matches_nothing() {
        // テスト項目: 空のリストはどのテキストにも一致しない
        // given (前提条件):
        let list = BannedWordList::new();

        // when (操作):
        let result = list.matches("anything");

        // then (期待する結果):
        assert!(!result);
    }

    #[test]
    fn test_from_loaded_drops_blank_and_duplicate_entries() {
        // テスト項目: 読み込み時に空エントリと完全一致の重複が取り除かれ、順序は保たれる
        // given (前提条件):
        let raw = vec![
            "baka".to_string(),
            "".to_string(),
            "aho".to_string(),
            "baka".to_string(),
            "  ".to_string(),
        ];

        // when (操作):
        let list = BannedWordList::from_loaded(raw);

        // then (期待する結果):
        assert_eq!(list.as_slice(), &["baka".to_string(), "aho".to_string()]);
        assert!(!list.matches("harmless text"));
    }

    #[test]
    fn test_contains_exact_is_case_sensitive() {
        // テスト項目: 重複判定は大文字小文字を区別する（照合とは扱いが異なる）
        // given (前提条件):
        let list = list_of(&["baka"]);

        // when (操作):
        let same = list.contains_exact("baka");
        let different_case = list.contains_exact("Baka");

        // then (期待する結果):
        assert!(same);
        assert!(!different_case);
    }
}
