use bakehouse_common::{Assignment, Mapping, MatchStatus};

/// 1回の照合実行の結果
#[derive(Debug, Clone, Default)]
pub struct MatchReport {
    pub images_found: usize,
    pub products_found: usize,
    /// 処理順の割り当て
    pub assignments: Vec<Assignment>,
    /// カタログ順の対応表
    pub mapping: Mapping,
}

impl MatchReport {
    pub fn count(&self, status: MatchStatus) -> usize {
        self.assignments.iter().filter(|a| a.status == status).count()
    }
}

/// 進捗行: `✓ <商品名:40> -> <ファイル名:50> (score: 0.60)`
pub fn format_assignment(assignment: &Assignment) -> String {
    let (mark, detail) = match assignment.status {
        MatchStatus::Matched => ("✓", format!("(score: {:.2})", assignment.score)),
        MatchStatus::LowConfidence => ("⚠", format!("(score: {:.2})", assignment.score)),
        MatchStatus::Fallback => ("⚠", "(no match, assigned)".to_string()),
    };
    format!(
        "{} {:40} -> {:50} {}",
        mark, assignment.product, assignment.file_name, detail
    )
}
