//! Symptom assistant replies.
//!
//! A decision list: rules are tried top to bottom against the lower-cased
//! message and the first rule with a matching trigger answers. Triggers are
//! plain substrings, so "hi" also matches inside "this". Rule order decides
//! overlaps ("chest pain" must be seen before "pain") and is part of the
//! behaviour.

use serde::{Deserialize, Serialize};

/// Health topic a reply belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Topic {
    Cardiac,
    Dizziness,
    Diabetes,
    Fatigue,
    Numbness,
    Headache,
    Memory,
    Respiratory,
    Fever,
    Lump,
    WeightLoss,
    Anemia,
    Musculoskeletal,
    Menstrual,
    Pregnancy,
    Dental,
    Diet,
    Exercise,
    Sleep,
    MentalHealth,
    Greeting,
    Thanks,
    Help,
    Checkup,
    Unknown,
}

/// One entry of the decision list.
#[derive(Debug)]
pub struct ResponseRule {
    pub topic: Topic,
    pub triggers: &'static [&'static str],
    pub response: &'static str,
}

impl ResponseRule {
    /// `text` must already be lower-cased.
    pub fn matches(&self, text: &str) -> bool {
        self.triggers.iter().any(|t| text.contains(t))
    }
}

pub const FALLBACK_RESPONSE: &str = "🤔 I’m not sure about that symptom. Try describing one in simple terms, e.g., 'chest pain', 'blurred vision', or 'frequent urination'.";

/// Evaluation order is significant.
pub static RESPONSE_RULES: &[ResponseRule] = &[
    ResponseRule {
        topic: Topic::Cardiac,
        triggers: &["chest pain", "pressure", "palpitations", "shortness of breath"],
        response: "⚠️ Possible cardiac issue. Please visit a cardiologist immediately — symptoms like chest pain or breathlessness can indicate heart disease.",
    },
    ResponseRule {
        topic: Topic::Dizziness,
        triggers: &["dizziness", "fainting", "lightheaded"],
        response: "🩺 Dizziness could be due to low blood pressure, dehydration, or heart rhythm issues. Rest, hydrate, and seek medical evaluation if it persists.",
    },
    ResponseRule {
        topic: Topic::Diabetes,
        triggers: &["thirst", "urination", "frequent urination", "blurred vision", "vision"],
        response: "👁️ Frequent thirst or urination and blurred vision can indicate diabetes. Please get a blood sugar test soon.",
    },
    ResponseRule {
        topic: Topic::Fatigue,
        triggers: &["fatigue", "tired", "weakness"],
        response: "😴 Fatigue or weakness can be due to anemia, thyroid issues, diabetes, or lifestyle. Consider a basic health screening.",
    },
    ResponseRule {
        topic: Topic::Numbness,
        triggers: &["numbness", "tingling", "hands", "feet"],
        response: "🦶 Numbness or tingling in hands/feet could indicate nerve damage, often related to diabetes or vitamin deficiency.",
    },
    ResponseRule {
        topic: Topic::Headache,
        triggers: &["headache", "migraine", "head pain"],
        response: "🤕 Persistent headaches can be due to stress, dehydration, or migraines. If severe or sudden, seek immediate care.",
    },
    ResponseRule {
        topic: Topic::Memory,
        triggers: &["memory", "confusion", "forget"],
        response: "🧠 Memory issues can arise from stress, sleep deprivation, or neurological conditions. Consult a neurologist if ongoing.",
    },
    ResponseRule {
        topic: Topic::Respiratory,
        triggers: &["cough", "cold", "breathing", "asthma"],
        response: "🌬️ Persistent cough or shortness of breath may indicate respiratory infection or asthma. Visit a pulmonologist if it lasts over a week.",
    },
    ResponseRule {
        topic: Topic::Fever,
        triggers: &["fever", "temperature", "infection"],
        response: "🌡️ Fever may suggest infection. Stay hydrated and consult a doctor if it persists beyond 2 days.",
    },
    ResponseRule {
        topic: Topic::Lump,
        triggers: &["lump", "mass", "tumor"],
        response: "🩸 Unexplained lumps or swelling should be examined promptly — could indicate infection or tumor. Early detection saves lives.",
    },
    ResponseRule {
        topic: Topic::WeightLoss,
        triggers: &["weight loss", "loss of appetite"],
        response: "⚖️ Sudden unexplained weight loss could relate to cancer, thyroid, or metabolic diseases. Please get a full-body checkup.",
    },
    ResponseRule {
        topic: Topic::Anemia,
        triggers: &["pale", "anemia", "iron"],
        response: "🩸 Pale skin or anemia symptoms indicate low hemoglobin. Eat iron-rich foods and consult for blood tests.",
    },
    ResponseRule {
        topic: Topic::Musculoskeletal,
        triggers: &["joint", "pain", "back pain", "stiffness"],
        response: "🦴 Joint or back pain can result from posture, arthritis, or inflammation. If chronic, see an orthopedist or physiotherapist.",
    },
    ResponseRule {
        topic: Topic::Menstrual,
        triggers: &["menstrual", "period", "pcos", "cramps"],
        response: "👩‍⚕️ Irregular periods or cramps may signal PCOS or hormonal imbalance. Consider consulting a gynecologist.",
    },
    ResponseRule {
        topic: Topic::Pregnancy,
        triggers: &["pregnancy", "pregnant"],
        response: "🤰 Pregnancy-related concerns require medical follow-up. Please contact your obstetrician for personalized care.",
    },
    ResponseRule {
        topic: Topic::Dental,
        triggers: &["tooth", "gum", "mouth"],
        response: "😁 Dental pain or bleeding gums can indicate infection. Maintain oral hygiene and visit a dentist soon.",
    },
    ResponseRule {
        topic: Topic::Diet,
        triggers: &["diet", "food", "nutrition"],
        response: "🥗 Balanced diet helps reduce risk for diabetes and heart disease. Focus on vegetables, lean proteins, and hydration.",
    },
    ResponseRule {
        topic: Topic::Exercise,
        triggers: &["exercise", "workout"],
        response: "🏃 Regular exercise improves heart health and blood sugar control. Aim for 30 minutes of moderate activity daily.",
    },
    ResponseRule {
        topic: Topic::Sleep,
        triggers: &["sleep", "insomnia"],
        response: "😴 Good sleep (7–8 hours) is vital for metabolism, mood, and heart health. Reduce screen time before bed.",
    },
    ResponseRule {
        topic: Topic::MentalHealth,
        triggers: &["stress", "anxiety", "depression"],
        response: "🧘 Mental health matters! Practice relaxation techniques, take breaks, and reach out for counseling if needed.",
    },
    ResponseRule {
        topic: Topic::Greeting,
        triggers: &["hello", "hi", "hey"],
        response: "👋 Hi there! I’m your AI health assistant. Describe any symptom and I’ll suggest possible next steps.",
    },
    ResponseRule {
        topic: Topic::Thanks,
        triggers: &["thank"],
        response: "😊 You're welcome! Stay proactive about your health — early diagnosis saves lives.",
    },
    ResponseRule {
        topic: Topic::Help,
        triggers: &["help"],
        response: "🆘 I can help you understand possible risks based on symptoms like chest pain, fatigue, or thirst. Type one of them!",
    },
    ResponseRule {
        topic: Topic::Checkup,
        triggers: &["test", "checkup", "risk"],
        response: "🩺 You can use the Health Analyzer form below to get your personalized risk score instantly.",
    },
];

/// First rule matching `text`, case-insensitively.
pub fn matching_rule(text: &str) -> Option<&'static ResponseRule> {
    let lower = text.to_lowercase();
    RESPONSE_RULES.iter().find(|rule| rule.matches(&lower))
}

/// Canned reply for a free-text message.
pub fn classify(text: &str) -> &'static str {
    matching_rule(text).map_or(FALLBACK_RESPONSE, |rule| rule.response)
}

/// Topic of the reply [`classify`] would give.
pub fn classify_topic(text: &str) -> Topic {
    matching_rule(text).map_or(Topic::Unknown, |rule| rule.topic)
}
