use taskdash::output::{format_human, HumanOutput};

#[test]
fn format_human_includes_sections() {
    let mut human = HumanOutput::new("taskdash add: task added");
    human.push_summary("id", "2");
    human.push_summary("text", "Buy milk");
    human.push_warning("failed to save tasks: disk full");
    human.push_next_step("taskdash list");

    let rendered = format_human(&human);
    assert!(rendered.contains("taskdash add: task added"));
    assert!(rendered.contains("Summary:"));
    assert!(rendered.contains("- id: 2"));
    assert!(rendered.contains("- text: Buy milk"));
    assert!(rendered.contains("Warnings:"));
    assert!(rendered.contains("- failed to save tasks: disk full"));
    assert!(rendered.contains("Next steps:"));
    assert!(rendered.contains("- taskdash list"));
}

#[test]
fn format_human_omits_empty_sections() {
    let human = HumanOutput::new("taskdash stats");
    let rendered = format_human(&human);
    assert_eq!(rendered, "taskdash stats");
}

#[test]
fn format_human_lists_details() {
    let mut human = HumanOutput::new("taskdash list: 2 tasks");
    human.push_detail("[ ]   1  Learn React basics");
    human.push_detail("[x]   2  Write tests");

    let rendered = format_human(&human);
    assert!(rendered.contains("Details:"));
    assert!(rendered.contains("- [ ]   1  Learn React basics"));
    assert!(rendered.contains("- [x]   2  Write tests"));
}
