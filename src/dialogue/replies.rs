// ABOUTME: Canned reply texts — every string the responder can return.
// ABOUTME: Deserialized from the [replies] and [resume] config sections, defaulting to the portfolio copy.

use serde::Deserialize;

use super::types::{Intent, Region};

/// Canned answers, one per intent plus the resume dialogue.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Replies {
    pub greeting: String,
    pub skills: String,
    pub projects: String,
    pub education: String,
    pub contact: String,
    pub experience: String,
    pub fallback: String,
    pub resume_prompt: String,
    pub resume_clarify: String,
}

impl Default for Replies {
    fn default() -> Self {
        Self {
            greeting: "Hello! I am Manthan's AI Assistant. Ask me about his skills, projects, or experience.".to_string(),
            skills: "Manthan's key tech stack includes Python, PyTorch, React, Node.js, MongoDB, AWS, and Oracle OCI.".to_string(),
            projects: "Key projects include Narrative-to-Clip (Text-to-Video AI), DocInsight (RAG System), and Web Task Autopilot (Autonomous Agents).".to_string(),
            education: "Manthan holds an MSc in Artificial Intelligence from the University of Essex (UK) and a BE in Information Technology from Ahmedabad Institute of Technology (India).".to_string(),
            contact: "You can reach him at manthanmittal93@gmail.com.".to_string(),
            experience: "He is currently working as an AI & Data Analytics Intern at KM Steel.".to_string(),
            fallback: "I'm not sure about that. You can ask about my skills, projects, education, or ask to download my resume.".to_string(),
            resume_prompt: "I have two versions of the resume available. Would you like the United Kingdom version or the India version?".to_string(),
            resume_clarify: "Please specify which version you would like: United Kingdom or India?".to_string(),
        }
    }
}

impl Replies {
    /// The fixed answer for an intent answered from `Idle`.
    pub fn for_intent(&self, intent: Intent) -> &str {
        match intent {
            Intent::Resume => &self.resume_prompt,
            Intent::Skills => &self.skills,
            Intent::Projects => &self.projects,
            Intent::Education => &self.education,
            Intent::Contact => &self.contact,
            Intent::Experience => &self.experience,
            Intent::Greeting => &self.greeting,
            Intent::Fallback => &self.fallback,
        }
    }
}

/// Download locations for each resume version.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ResumeLinks {
    pub uk: String,
    pub india: String,
}

impl Default for ResumeLinks {
    fn default() -> Self {
        Self {
            uk: "/Manthan_Mittal_Resume_UK.pdf".to_string(),
            india: "/Manthan_Mittal_Resume_India.pdf".to_string(),
        }
    }
}

impl ResumeLinks {
    /// The link reply for a chosen region.
    pub fn reply_for(&self, region: Region) -> String {
        match region {
            Region::UnitedKingdom => {
                format!("Here is the UK version of Manthan's Resume: {}", self.uk)
            }
            Region::India => {
                format!("Here is the India version of Manthan's Resume: {}", self.india)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_replies_are_non_empty() {
        let replies = Replies::default();
        for intent in [
            Intent::Resume,
            Intent::Skills,
            Intent::Projects,
            Intent::Education,
            Intent::Contact,
            Intent::Experience,
            Intent::Greeting,
            Intent::Fallback,
        ] {
            assert!(!replies.for_intent(intent).is_empty(), "{:?}", intent);
        }
        assert!(!replies.resume_clarify.is_empty());
    }

    #[test]
    fn partial_replies_keep_defaults() {
        let replies: Replies = toml::from_str(r#"skills = "Rust and more Rust.""#).unwrap();
        assert_eq!(replies.skills, "Rust and more Rust.");
        assert_eq!(replies.contact, Replies::default().contact);
    }

    #[test]
    fn resume_reply_contains_link() {
        let links = ResumeLinks::default();
        assert!(
            links
                .reply_for(Region::UnitedKingdom)
                .contains("/Manthan_Mittal_Resume_UK.pdf")
        );
        assert!(
            links
                .reply_for(Region::India)
                .contains("/Manthan_Mittal_Resume_India.pdf")
        );
    }
}
