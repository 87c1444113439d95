//! Pretty output formatting.

use recipebox_core::profile::Profile;

/// Format a profile for display.
pub fn format_profile(profile: &Profile) -> String {
    let mut output = format!(
        "{}\n  ID: {}\n  Email: {}",
        profile.full_name, profile.id, profile.email
    );
    output.push_str(&format!(
        "\n  Authored: {}",
        recipe_list(&profile.authored_recipes)
    ));
    output.push_str(&format!("\n  Liked: {}", recipe_list(&profile.liked_recipes)));
    output
}

/// Format profiles for display.
pub fn format_profiles(profiles: &[Profile]) -> String {
    if profiles.is_empty() {
        return "No profiles found.".to_string();
    }
    let mut output = format!("PROFILES ({})\n", profiles.len());
    output.push_str(&"-".repeat(40));
    for profile in profiles {
        output.push_str(&format!("\n{}", format_profile(profile)));
        output.push('\n');
    }
    output
}

fn recipe_list(recipes: &[String]) -> String {
    if recipes.is_empty() {
        "-".to_string()
    } else {
        recipes.join(", ")
    }
}
