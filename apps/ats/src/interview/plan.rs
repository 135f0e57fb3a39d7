use crate::interview::level::Level;

/// Seven day lines. Day 1 names up to four JD topics; days 2 and 3 use the
/// level's first two focus areas.
pub fn prep_plan(level: Level, topics: &[String]) -> Vec<String> {
    let focus = level.focus_areas();
    let topic_list = if topics.is_empty() {
        "key topics from the JD".to_string()
    } else {
        topics
            .iter()
            .take(4)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    };
    let fundamentals = focus.first().copied().unwrap_or("core concepts for this role");
    let practice = focus.get(1).copied().unwrap_or("CI/CD & automation");

    vec![
        format!("Day 1 – Read JD deeply, highlight responsibilities, identify {topic_list}."),
        format!("Day 2 – Revise fundamentals: {fundamentals}."),
        format!("Day 3 – Hands-on practice: implement or rehearse a small project related to {practice}."),
        format!("Day 4 – System design / architecture questions for this role level ({level})."),
        "Day 5 – Behavioral questions: write STAR stories for 5–7 real situations.".to_string(),
        "Day 6 – Mock interview: 45–60 mins with a friend or record yourself and review.".to_string(),
        "Day 7 – Quick revision, prepare questions to ask the interviewer, sleep well.".to_string(),
    ]
}
