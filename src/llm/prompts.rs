use crate::models::{ContractorQuery, ProjectSpecialization};

const INSTRUCTIONS_FRAMEWORK: &str = r#"You are a helpful assistant that finds contractors for a given project.
You will be given a specific county in the United States and a specific project type.
You will need to find the top 10-20 contractors operating in the county that could potentially be interested in the project.
Results may include contractors that specialize in the given project type, or general contractors that may be interested in the project.
Prioritize finding local contractors vs nationwide firms.

The results should be returned in a list of objects with the following fields:
- name: the name of the contractor / company name
- website: the website of the contractor (if available)
- phone: the phone number of the contractor (if available)
- email: the email address of the contractor (if available)
- city: the city of the contractor
- state: the state of the contractor
- specialization: list of specific project types the contractor specializes in from the following list:
{specializations}

All information should be found through web search.
All information should come directly from the contractor's website or other reputable sources."#;

const INPUT_TEMPLATE: &str = "Find the top 10-20 contractors operating in {county} that could potentially be interested in {project_type} projects.";

fn vocabulary_line(value: ProjectSpecialization) -> String {
    match value {
        ProjectSpecialization::General => "    - general (general contractor)".to_string(),
        other => format!("    - {}", other),
    }
}

/// Fixed instruction block describing the output fields and specialization vocabulary
pub fn instructions() -> String {
    let specializations = ProjectSpecialization::ALL
        .into_iter()
        .map(vocabulary_line)
        .collect::<Vec<_>>()
        .join("\n");

    INSTRUCTIONS_FRAMEWORK.replace("{specializations}", &specializations)
}

/// Task description embedding the county and project type verbatim
pub fn build_input(query: &ContractorQuery) -> String {
    INPUT_TEMPLATE
        .replace("{project_type}", query.project_type.as_str())
        .replace("{county}", &query.county)
}
