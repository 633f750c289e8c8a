pub mod formatter;

pub use formatter::{
    format_bar, format_batch_table, format_gift, format_insights, format_ratio, format_report,
    format_tsv, should_use_colors, ScoredRespondent,
};
