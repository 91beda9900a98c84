//! Static health-topic catalogue shown by the Health Information service.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthTopic {
    Nutrition,
    Cardiology,
    Diabetes,
    MentalHealth,
    Fitness,
    WomensHealth,
    GeneralWellness,
}

/// Title, one-line description and key points for a topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopicInfo {
    pub title: &'static str,
    pub description: &'static str,
    pub points: &'static [&'static str],
}

impl HealthTopic {
    pub const ALL: [HealthTopic; 7] = [
        HealthTopic::Nutrition,
        HealthTopic::Cardiology,
        HealthTopic::Diabetes,
        HealthTopic::MentalHealth,
        HealthTopic::Fitness,
        HealthTopic::WomensHealth,
        HealthTopic::GeneralWellness,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            HealthTopic::Nutrition => "Nutrition",
            HealthTopic::Cardiology => "Cardiology",
            HealthTopic::Diabetes => "Diabetes",
            HealthTopic::MentalHealth => "Mental Health",
            HealthTopic::Fitness => "Fitness",
            HealthTopic::WomensHealth => "Women's Health",
            HealthTopic::GeneralWellness => "General Wellness",
        }
    }

    /// Case-insensitive lookup by display name.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(name))
    }

    pub fn info(&self) -> TopicInfo {
        match self {
            HealthTopic::Nutrition => TopicInfo {
                title: "🥗 Healthy Eating Essentials",
                description: "Learn the fundamentals of good nutrition for a healthy lifestyle. Small changes in diet can lead to significant health improvements.",
                points: &[
                    "Balanced Diet: Focus on fruits, vegetables, whole grains, lean proteins, and healthy fats.",
                    "Vitamins & Minerals: Understand essential nutrients and their sources.",
                    "Hydration: Drink adequate water throughout the day.",
                    "Macronutrients: Balance your intake of carbohydrates, proteins, and fats.",
                    "Fiber: Incorporate fiber-rich foods for digestive health.",
                ],
            },
            HealthTopic::Cardiology => TopicInfo {
                title: "❤️ Heart Health Tips",
                description: "Information on maintaining a healthy heart and recognizing cardiovascular concerns.",
                points: &[
                    "Blood Pressure Control: Regular monitoring and management are crucial.",
                    "Cholesterol Management: Understand LDL, HDL, and triglycerides.",
                    "ECG (EKG): What it is and why it's used.",
                    "Heart Attack Signs: Recognize symptoms for prompt action (e.g., chest pain, shortness of breath).",
                    "Stress Management: Techniques to reduce stress and its impact on heart health.",
                ],
            },
            HealthTopic::Diabetes => TopicInfo {
                title: "🩸 Managing Diabetes",
                description: "Comprehensive guide to understanding and managing diabetes effectively.",
                points: &[
                    "Blood Sugar Monitoring: Importance of regular glucose checks.",
                    "Insulin Therapy: Understanding different types and administration.",
                    "Low-carb Diet: Benefits and considerations for diabetes management.",
                    "Glycemic Index: How foods affect blood sugar levels.",
                ],
            },
            HealthTopic::MentalHealth => TopicInfo {
                title: "🧠 Mental Wellness & Support",
                description: "Resources and advice for fostering positive mental health and well-being.",
                points: &[
                    "Meditation & Mindfulness: Practices for stress reduction and focus.",
                    "Therapy & Counseling: When and how to seek professional help.",
                    "Sleep Hygiene: Tips for improving sleep quality.",
                    "Stress Relief Techniques: Breathing exercises, hobbies, and relaxation.",
                    "CBT (Cognitive Behavioral Therapy): An overview of this therapeutic approach.",
                ],
            },
            HealthTopic::Fitness => TopicInfo {
                title: "💪 Fitness and Active Lifestyle",
                description: "Guidance on incorporating physical activity into your daily life for improved health.",
                points: &[
                    "Cardio Exercises: Benefits and different types (running, swimming, cycling).",
                    "Strength Training: Building muscle and improving bone density.",
                    "Yoga & Flexibility: Enhancing balance, flexibility, and relaxation.",
                    "Routine Building: How to create an effective workout plan.",
                    "Recovery: Importance of rest and recovery in fitness.",
                ],
            },
            HealthTopic::WomensHealth => TopicInfo {
                title: "🌸 Women's Wellness",
                description: "Specific health topics and concerns relevant to women's well-being.",
                points: &[
                    "Menstrual Health: Understanding cycles and common issues.",
                    "PCOS (Polycystic Ovary Syndrome): Symptoms and management.",
                    "Breast Health: Self-exams and screening guidelines.",
                    "Pregnancy & Postpartum Care: Essential information for expectant and new mothers.",
                    "Menopause: Navigating changes and symptoms.",
                ],
            },
            HealthTopic::GeneralWellness => TopicInfo {
                title: "✨ Holistic Health & General Well-being",
                description: "Broad topics covering overall health and a balanced lifestyle.",
                points: &[
                    "Preventive Care: Importance of regular check-ups and screenings.",
                    "Stress Management: Techniques to cope with daily stressors.",
                    "Work-Life Balance: Achieving harmony between personal and professional life.",
                    "Healthy Habits: Building routines for sustained well-being.",
                    "Community & Social Health: The role of connections in overall health.",
                ],
            },
        }
    }
}

impl fmt::Display for HealthTopic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
