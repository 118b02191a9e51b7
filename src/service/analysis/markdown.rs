use crate::model::analysis::AnalysisBlock;

/// Parses the markdown-like subset the insights endpoint responds with into
/// display blocks: `#`/`##`/`###` headings, `**key**: value` lines, `- `
/// bullets, blank lines and plain paragraphs.
pub fn parse_blocks(content: &str) -> Vec<AnalysisBlock> {
    content.lines().map(parse_line).collect()
}

fn parse_line(line: &str) -> AnalysisBlock {
    if let Some(text) = line.strip_prefix("# ") {
        return AnalysisBlock::Heading {
            level: 1,
            text: text.to_string(),
        };
    }
    if let Some(text) = line.strip_prefix("## ") {
        return AnalysisBlock::Heading {
            level: 2,
            text: text.to_string(),
        };
    }
    if let Some(text) = line.strip_prefix("### ") {
        return AnalysisBlock::Heading {
            level: 3,
            text: text.to_string(),
        };
    }
    if line.contains("**") && line.contains(':') {
        let parts: Vec<&str> = line.split("**").collect();
        if parts.len() >= 2 {
            let key = parts[1].trim_end_matches(':').to_string();
            let value = parts.get(2).map(|v| v.trim_start_matches(':').trim()).unwrap_or_default();
            return AnalysisBlock::KeyValue {
                key,
                value: value.to_string(),
            };
        }
    }
    if let Some(text) = line.strip_prefix("- ") {
        return AnalysisBlock::Bullet(text.to_string());
    }
    if line.trim().is_empty() {
        return AnalysisBlock::Blank;
    }
    AnalysisBlock::Paragraph(line.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_and_bullet_lines_become_blocks() {
        let blocks = parse_blocks("# Title\n- point");
        assert_eq!(
            blocks,
            vec![
                AnalysisBlock::Heading {
                    level: 1,
                    text: "Title".to_string()
                },
                AnalysisBlock::Bullet("point".to_string()),
            ]
        );
    }

    #[test]
    fn heading_levels_follow_hash_count() {
        let blocks = parse_blocks("## Teams\n### Blue Side");
        assert_eq!(
            blocks,
            vec![
                AnalysisBlock::Heading {
                    level: 2,
                    text: "Teams".to_string()
                },
                AnalysisBlock::Heading {
                    level: 3,
                    text: "Blue Side".to_string()
                },
            ]
        );
    }

    #[test]
    fn bold_key_value_lines_are_split() {
        let blocks = parse_blocks("**KDA**: 3.5");
        assert_eq!(
            blocks,
            vec![AnalysisBlock::KeyValue {
                key: "KDA".to_string(),
                value: "3.5".to_string()
            }]
        );
    }

    #[test]
    fn plain_and_blank_lines_round_out_the_taxonomy() {
        let blocks = parse_blocks("A strong early game.\n\nKeep warding.");
        assert_eq!(
            blocks,
            vec![
                AnalysisBlock::Paragraph("A strong early game.".to_string()),
                AnalysisBlock::Blank,
                AnalysisBlock::Paragraph("Keep warding.".to_string()),
            ]
        );
    }

    #[test]
    fn bold_line_without_colon_stays_a_paragraph() {
        let blocks = parse_blocks("**emphasis only**");
        assert_eq!(blocks, vec![AnalysisBlock::Paragraph("**emphasis only**".to_string())]);
    }
}
