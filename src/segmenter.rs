//! 题目切分模块
//!
//! 把 OCR 识别出的逐行文本还原成"题干 + 选项"的结构。
//!
//! 规则：
//! - 以 `A)`、`b.` 这类"单个字母 + `.`/`)`"开头的行视为选项行
//! - 其余行视为题干，连续的题干行用单个空格拼接
//! - 当前题目已有题干和选项时，再遇到题干行就封存当前题目并开始新题
//! - 结束时只保留同时有题干和选项的题目

use crate::models::question::Question;
use regex::Regex;
use std::sync::OnceLock;

/// 选项标记：单个 ASCII 字母后接 `.` 或 `)`
fn marker_regex() -> &'static Regex {
    static MARKER: OnceLock<Regex> = OnceLock::new();
    MARKER.get_or_init(|| Regex::new(r"[A-Za-z][.)]").expect("选项标记正则无效"))
}

/// 判断一行是否以选项标记开头
pub fn is_option_line(line: &str) -> bool {
    marker_regex().find(line).is_some_and(|m| m.start() == 0)
}

/// 把一行拆成多个选项片段
///
/// OCR 经常把同一行的多个选项合并（如 `A) Paris B) London`），
/// 这里在每个选项标记的起始位置切开，片段保留自己的标记。
/// 切开后去掉首尾空白，丢弃空片段。
pub fn split_options(line: &str) -> Vec<String> {
    // 标记固定两个字符且第二个字符不是字母，所以 find_iter 不会漏掉相邻的标记
    let mut starts: Vec<usize> = marker_regex().find_iter(line).map(|m| m.start()).collect();
    if starts.first() != Some(&0) {
        starts.insert(0, 0);
    }

    let mut fragments = Vec::with_capacity(starts.len());
    for (i, &start) in starts.iter().enumerate() {
        let end = starts.get(i + 1).copied().unwrap_or(line.len());
        let fragment = line[start..end].trim();
        if !fragment.is_empty() {
            fragments.push(fragment.to_string());
        }
    }
    fragments
}

/// 切分过程中的状态：已封存的题目 + 正在累积的题目
#[derive(Debug, Default)]
struct Segmentation {
    sealed: Vec<Question>,
    current: Question,
}

impl Segmentation {
    fn push_line(mut self, line: &str) -> Self {
        if is_option_line(line) {
            self.current.options.extend(split_options(line));
            return self;
        }

        if self.current.is_complete() {
            let finished = std::mem::take(&mut self.current);
            self.sealed.push(finished);
        }

        if self.current.text.is_empty() {
            self.current.text = line.to_string();
        } else {
            self.current.text.push(' ');
            self.current.text.push_str(line);
        }
        self
    }

    fn finish(mut self) -> Vec<Question> {
        if self.current.is_complete() {
            self.sealed.push(self.current);
        }
        self.sealed
    }
}

/// 将 OCR 文本切分为题目列表
///
/// 纯函数，任何输入都不会失败；没有识别出完整题目时返回空列表。
pub fn segment(raw_text: &str) -> Vec<Question> {
    raw_text
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .fold(Segmentation::default(), Segmentation::push_line)
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(text: &str, options: &[&str]) -> Question {
        Question {
            text: text.to_string(),
            options: options.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_option_marker_detection() {
        assert!(is_option_line("A) Paris"));
        assert!(is_option_line("b. London"));
        assert!(is_option_line("Z)"));
        assert!(!is_option_line("AB) two letters"));
        assert!(!is_option_line("1) numbered"));
        assert!(!is_option_line("What is 2+2?"));
        assert!(!is_option_line("(A) wrapped"));
        assert!(!is_option_line(""));
    }

    #[test]
    fn test_split_merged_options() {
        assert_eq!(split_options("A) Paris B) London"), vec!["A) Paris", "B) London"]);
        assert_eq!(
            split_options("a.one b.two c)three"),
            vec!["a.one", "b.two", "c)three"]
        );
        assert_eq!(split_options("A) Paris"), vec!["A) Paris"]);
    }

    #[test]
    fn test_split_inside_words() {
        // 与原有行为一致：词内的 "r." 也会被当成标记
        assert_eq!(split_options("A) Mr. Smith"), vec!["A) M", "r. Smith"]);
    }

    #[test]
    fn test_two_questions() {
        let text = "What is 2+2?\nA) 3\nB) 4\nWhat is the capital of France?\nA) Paris\nB) London";
        assert_eq!(
            segment(text),
            vec![
                q("What is 2+2?", &["A) 3", "B) 4"]),
                q("What is the capital of France?", &["A) Paris", "B) London"]),
            ]
        );
    }

    #[test]
    fn test_multi_line_question_text() {
        let result = segment("What is\nthe capital of France?\nA) Paris\nB) London");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].text, "What is the capital of France?");
    }

    #[test]
    fn test_no_options_yields_nothing() {
        assert!(segment("just some prose\nand more prose").is_empty());
        assert!(segment("").is_empty());
        assert!(segment("\n\n   \n").is_empty());
    }

    #[test]
    fn test_options_only_yields_nothing() {
        assert!(segment("A) one\nB) two\nC) three").is_empty());
    }

    #[test]
    fn test_leading_options_attach_to_first_question() {
        let result = segment("A) Paris B) London\nWhich city is in France?");
        assert_eq!(result, vec![q("Which city is in France?", &["A) Paris", "B) London"])]);
    }

    #[test]
    fn test_trailing_stem_without_options_is_dropped() {
        let result = segment("Q1?\nA) yes\nQ2 has no options");
        assert_eq!(result, vec![q("Q1?", &["A) yes"])]);
    }

    #[test]
    fn test_blank_lines_and_whitespace_ignored() {
        let compact = "What is 2+2?\nA) 3\nB) 4";
        let noisy = "\n\n  What is 2+2?  \r\n\n\tA) 3\n\n B) 4 \n\n";
        assert_eq!(segment(compact), segment(noisy));
    }

    #[test]
    fn test_unordered_markers_are_kept_in_order() {
        let result = segment("Pick one\nC) third\nA) first");
        assert_eq!(result, vec![q("Pick one", &["C) third", "A) first"])]);
    }

    #[test]
    fn test_same_input_same_output() {
        let text = "Q?\nA) x B) y\nNext?\nc. z";
        assert_eq!(segment(text), segment(text));
    }
}
