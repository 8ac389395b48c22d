use crate::entities::resume::Resume;

/// Weight of a section that is expected but has no entries yet.
const EMPTY_SECTION_WEIGHT: usize = 1;
/// Scored fields per skill entry (name and level).
const SKILL_FIELD_COUNT: usize = 2;

fn filled(field: &str) -> bool {
    !field.trim().is_empty()
}

fn count_filled(fields: &[&str]) -> usize {
    fields.iter().filter(|field| filled(field)).count()
}

/// Heuristic completion score of a résumé, as an integer percentage.
///
/// Scored units: the six personal-info contact fields (linkedin and website
/// excluded), six fields per education entry, six per experience entry
/// (`current` is not scorable), and two per skill entry — skills are always
/// fully credited because the add-skill flow requires both name and level.
/// An empty education, experience or skills list contributes one unfilled
/// unit, standing in for the entry the résumé is still expected to get.
/// Projects do not participate in the score.
pub fn calculate_completion(resume: &Resume) -> u8 {
    let mut total = 0usize;
    let mut completed = 0usize;

    let personal = &resume.personal_info;
    let personal_fields = [
        personal.first_name.as_str(),
        personal.last_name.as_str(),
        personal.email.as_str(),
        personal.phone.as_str(),
        personal.address.as_str(),
        personal.summary.as_str(),
    ];
    total += personal_fields.len();
    completed += count_filled(&personal_fields);

    if resume.education.is_empty() {
        total += EMPTY_SECTION_WEIGHT;
    } else {
        for edu in &resume.education {
            let fields = [
                edu.institution.as_str(),
                edu.degree.as_str(),
                edu.field_of_study.as_str(),
                edu.start_date.as_str(),
                edu.end_date.as_str(),
                edu.description.as_str(),
            ];
            total += fields.len();
            completed += count_filled(&fields);
        }
    }

    if resume.experience.is_empty() {
        total += EMPTY_SECTION_WEIGHT;
    } else {
        for exp in &resume.experience {
            let fields = [
                exp.company.as_str(),
                exp.position.as_str(),
                exp.location.as_str(),
                exp.start_date.as_str(),
                exp.end_date.as_str(),
                exp.description.as_str(),
            ];
            total += fields.len();
            completed += count_filled(&fields);
        }
    }

    if resume.skills.is_empty() {
        total += EMPTY_SECTION_WEIGHT;
    } else {
        total += resume.skills.len() * SKILL_FIELD_COUNT;
        completed += resume.skills.len() * SKILL_FIELD_COUNT;
    }

    if total == 0 {
        return 0;
    }

    let percentage = (completed as f64 / total as f64) * 100.0;
    (percentage.round() as u8).min(100)
}
