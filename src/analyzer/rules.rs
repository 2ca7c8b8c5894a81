//! Ordered category rule table for the report generator.
//!
//! Each rule maps one or more substring triggers to a fixed bundle of
//! advisory content across the thirteen report list fields. Rules are
//! evaluated independently and their bundles accumulate when several
//! categories match; only the fallback is mutually exclusive with the
//! rest (it applies when nothing else matched).

/// Advisory content contributed by one matched category.
#[derive(Debug)]
pub struct ContentBundle {
    pub symptoms: &'static [&'static str],
    pub causes: &'static [&'static str],
    pub deficiencies: &'static [&'static str],
    pub prevention: &'static [&'static str],
    pub cure: &'static [&'static str],
    pub medicines: &'static [&'static str],
    pub yoga: &'static [&'static str],
    pub exercises: &'static [&'static str],
    pub foods_to_eat: &'static [&'static str],
    pub foods_to_avoid: &'static [&'static str],
    pub things_to_follow: &'static [&'static str],
    pub things_to_avoid: &'static [&'static str],
    pub natural_remedies: &'static [&'static str],
}

/// A category rule: substring triggers plus the bundle they unlock.
#[derive(Debug)]
pub struct CategoryRule {
    pub name: &'static str,
    pub triggers: &'static [&'static str],
    pub bundle: ContentBundle,
}

impl CategoryRule {
    /// Substring match against already-lowercased input.
    pub fn matches(&self, normalized: &str) -> bool {
        self.triggers.iter().any(|t| normalized.contains(t))
    }
}

/// The ordered rule table. Order is part of the contract: when several
/// categories match the output lists accumulate in this order.
pub const RULES: &[CategoryRule] = &[
    CategoryRule {
        name: "headache",
        triggers: &["headache", "head pain"],
        bundle: ContentBundle {
            symptoms: &[
                "Persistent Headache",
                "Head pain and pressure",
                "Possible tension headache",
            ],
            causes: &[
                "Dehydration and insufficient fluid intake",
                "Stress and mental tension",
                "Eye strain from prolonged screen exposure",
                "Poor posture and neck tension",
                "Sleep deprivation or irregular sleep patterns",
                "Caffeine withdrawal",
            ],
            deficiencies: &[
                "Magnesium",
                "Vitamin B2 (Riboflavin)",
                "Vitamin D",
                "Omega-3 fatty acids",
                "Potassium",
            ],
            prevention: &[
                "Stay hydrated - drink 8-10 glasses of water daily",
                "Take regular breaks from screen time (20-20-20 rule)",
                "Practice stress management and relaxation techniques",
                "Maintain consistent sleep schedule (7-8 hours)",
                "Exercise regularly to improve circulation",
                "Maintain proper posture while working",
            ],
            cure: &[
                "Rest in a dark, quiet room",
                "Apply cold compress to forehead for 15-20 minutes",
                "Practice deep breathing and relaxation exercises",
                "Gentle neck and shoulder massage",
                "Stay hydrated and eat regular meals",
                "Avoid triggers like bright lights and loud noises",
            ],
            medicines: &[
                "Ibuprofen (400mg) as needed (consult doctor)",
                "Acetaminophen (Paracetamol) 500mg",
                "Magnesium supplements (400mg daily)",
                "Vitamin B2 (Riboflavin) 400mg",
                "Aspirin for occasional headaches",
                "⚠️ Consult healthcare provider before starting any medication",
            ],
            yoga: &[
                "Child's Pose (Balasana) - 2 minutes",
                "Seated Forward Bend (Paschimottanasana)",
                "Legs-Up-The-Wall Pose (Viparita Karani) - 5 minutes",
                "Corpse Pose (Shavasana) - 10 minutes",
                "Neck Rolls and Gentle Neck Stretches",
                "Pranayama breathing exercises",
            ],
            exercises: &[
                "Light walking for 20-30 minutes daily",
                "Neck and shoulder stretches",
                "Eye exercises and focusing techniques",
                "Gentle aerobic exercises",
                "Swimming or water exercises",
                "Avoid vigorous exercise during headache episodes",
            ],
            foods_to_eat: &[
                "Leafy greens (spinach, kale)",
                "Nuts and seeds (almonds, pumpkin seeds, flaxseeds)",
                "Fatty fish (salmon, mackerel, sardines)",
                "Bananas (rich in potassium)",
                "Watermelon and hydrating fruits",
                "Ginger tea and herbal teas",
                "Whole grains",
                "Yogurt and probiotic foods",
            ],
            foods_to_avoid: &[
                "Processed and packaged foods",
                "Excessive caffeine and energy drinks",
                "Alcohol and wine (especially red wine)",
                "Aged cheeses",
                "Artificial sweeteners (aspartame)",
                "MSG and food additives",
                "Chocolate (for some individuals)",
                "Nitrates and nitrites in processed meats",
            ],
            things_to_follow: &[
                "Maintain a consistent daily routine",
                "Practice stress management daily",
                "Keep a headache diary to identify triggers",
                "Ensure adequate hydration throughout the day",
                "Get regular, quality sleep",
                "Practice good posture",
                "Take regular screen breaks",
                "Create a relaxing bedtime routine",
            ],
            things_to_avoid: &[
                "Skipping meals or fasting",
                "Excessive screen time without breaks",
                "Loud noises and bright lights",
                "Stressful situations when possible",
                "Irregular sleep patterns",
                "Dehydration",
                "Overexertion and physical strain",
                "Known personal triggers",
            ],
            natural_remedies: &[
                "Ginger tea - anti-inflammatory properties",
                "Peppermint oil applied to temples",
                "Lavender essential oil aromatherapy",
                "Feverfew herb supplements",
                "Butterbur root extract",
                "Chamomile tea for relaxation",
                "Rosemary essential oil",
                "Apple cider vinegar diluted in water",
                "Cold compress with lavender",
            ],
        },
    },
    CategoryRule {
        name: "eye_strain",
        triggers: &["eye", "vision"],
        bundle: ContentBundle {
            symptoms: &[
                "Eye strain and discomfort",
                "Visual fatigue",
                "Dry or irritated eyes",
            ],
            causes: &[
                "Prolonged digital screen exposure",
                "Poor lighting conditions",
                "Incorrect glasses or contact lens prescription",
                "Dry eye syndrome",
                "Digital eye strain (Computer Vision Syndrome)",
                "Insufficient blinking while using screens",
                "Uncorrected vision problems",
            ],
            deficiencies: &[
                "Vitamin A",
                "Vitamin C",
                "Vitamin E",
                "Zinc",
                "Omega-3 fatty acids",
                "Lutein and Zeaxanthin",
            ],
            prevention: &[
                "Follow 20-20-20 rule (every 20 min, look 20 feet away for 20 seconds)",
                "Ensure proper lighting when reading or working",
                "Adjust screen brightness and contrast to comfortable levels",
                "Use blue light filters on devices",
                "Blink frequently to keep eyes moist",
                "Position screen at arm's length and slightly below eye level",
                "Regular eye examinations",
            ],
            cure: &[
                "Apply warm compress to eyes for 10 minutes",
                "Use artificial tears for dryness",
                "Practice eye exercises and focusing techniques",
                "Reduce screen time and take frequent breaks",
                "Get adequate sleep (7-8 hours)",
                "Keep eyes hydrated",
                "Adjust work environment ergonomics",
            ],
            medicines: &[
                "Artificial tears eye drops (preservative-free)",
                "Lubricating eye drops",
                "Omega-3 supplements",
                "Vitamin A supplements",
                "Antihistamine eye drops (if allergies present)",
                "⚠️ Consult an ophthalmologist for persistent issues",
            ],
            yoga: &[
                "Eye Rotations (clockwise and counterclockwise)",
                "Palming (rub hands together and place on closed eyes)",
                "Near and Far Focusing exercises",
                "Trataka (candle gazing meditation)",
                "Shavasana (complete relaxation)",
                "Blinking exercises",
            ],
            exercises: &[
                "Eye rolling exercises",
                "Focus shifting exercises",
                "Figure-8 eye movements",
                "Pencil push-ups for convergence",
                "Zooming exercises",
                "Regular walks outdoors for distance vision",
            ],
            foods_to_eat: &[
                "Carrots (rich in beta-carotene)",
                "Sweet potatoes",
                "Leafy greens (spinach, kale)",
                "Citrus fruits (oranges, lemons)",
                "Eggs (lutein and zeaxanthin)",
                "Fatty fish (salmon, tuna)",
                "Berries (blueberries, blackberries)",
                "Nuts (almonds, walnuts)",
            ],
            foods_to_avoid: &[
                "Excessive sugar and refined carbohydrates",
                "Processed snacks and junk food",
                "Trans fats",
                "Excessive salt",
                "Foods high in saturated fats",
            ],
            things_to_follow: &[
                "Regular eye checkups annually",
                "Proper screen ergonomics",
                "Adequate lighting in workspace",
                "Frequent blinking exercises",
                "Outdoor time for natural light exposure",
                "Proper sleep hygiene",
                "Hydration throughout the day",
            ],
            things_to_avoid: &[
                "Prolonged screen time without breaks",
                "Reading in dim light",
                "Rubbing eyes excessively",
                "Ignoring vision problems",
                "Using outdated prescriptions",
                "Smoking (damages blood vessels in eyes)",
                "Dehydration",
            ],
            natural_remedies: &[
                "Rose water eye wash",
                "Cucumber slices on closed eyes",
                "Cold green tea bags compress",
                "Aloe vera gel around eyes",
                "Triphala eye wash (Ayurvedic)",
                "Castor oil drops (food-grade)",
                "Fennel seed tea eye wash",
                "Chamomile tea compress",
            ],
        },
    },
    CategoryRule {
        name: "fatigue",
        triggers: &["tired", "fatigue", "weak"],
        bundle: ContentBundle {
            symptoms: &[
                "Chronic fatigue",
                "Low energy levels",
                "Physical weakness",
                "Mental exhaustion",
            ],
            causes: &[
                "Poor sleep quality or quantity",
                "Chronic stress and anxiety",
                "Dehydration",
                "Poor nutrition and diet",
                "Sedentary lifestyle",
                "Anemia or iron deficiency",
                "Vitamin deficiencies",
                "Thyroid issues",
            ],
            deficiencies: &[
                "Iron",
                "Vitamin B12",
                "Vitamin D",
                "Folate",
                "Magnesium",
                "Vitamin B6",
            ],
            prevention: &[
                "Establish regular sleep schedule (7-8 hours)",
                "Stay physically active with regular exercise",
                "Eat balanced, nutritious meals",
                "Manage stress effectively",
                "Stay hydrated throughout the day",
                "Limit caffeine and alcohol",
                "Take short breaks during work",
            ],
            cure: &[
                "Improve sleep hygiene and bedtime routine",
                "Start gentle exercise program",
                "Stay well hydrated",
                "Eat iron-rich and nutrient-dense foods",
                "Practice stress reduction techniques",
                "Get sunlight exposure daily",
                "Consider vitamin supplementation after medical advice",
            ],
            medicines: &[
                "Iron supplements (if deficient)",
                "Vitamin B12 supplements",
                "Vitamin D3 supplements",
                "Multivitamin complex",
                "CoQ10 supplements",
                "Magnesium supplements",
                "⚠️ Get blood tests before supplementation",
            ],
            yoga: &[
                "Sun Salutations (Surya Namaskar)",
                "Warrior Poses (Virabhadrasana I, II, III)",
                "Tree Pose (Vrksasana)",
                "Camel Pose (Ustrasana)",
                "Pranayama breathing exercises",
                "Power yoga sequences",
            ],
            exercises: &[
                "Brisk walking 30 minutes daily",
                "Light jogging or running",
                "Swimming",
                "Cycling",
                "Strength training 2-3 times per week",
                "High-Intensity Interval Training (HIIT)",
                "Dance or aerobics",
            ],
            foods_to_eat: &[
                "Lean red meat and poultry",
                "Spinach and dark leafy greens",
                "Lentils, beans, and legumes",
                "Quinoa and whole grains",
                "Eggs",
                "Citrus fruits",
                "Nuts and seeds",
                "Bananas",
                "Oatmeal",
                "Greek yogurt",
            ],
            foods_to_avoid: &[
                "Refined sugars and sweets",
                "Processed and fast foods",
                "Excessive caffeine",
                "Alcohol",
                "Heavy, greasy meals",
                "White bread and refined carbs",
                "Energy drinks",
            ],
            things_to_follow: &[
                "Consistent sleep-wake schedule",
                "Regular meal times",
                "Daily physical activity",
                "Stress management practices",
                "Adequate water intake (8-10 glasses)",
                "Regular health checkups",
                "Mindfulness and meditation",
                "Social connections and activities",
            ],
            things_to_avoid: &[
                "Late night screen time",
                "Skipping meals",
                "Oversleeping on weekends",
                "Excessive stress without relief",
                "Sedentary lifestyle",
                "Negative thoughts and worry",
                "Isolation",
            ],
            natural_remedies: &[
                "Ashwagandha supplements (adaptogen)",
                "Ginseng tea",
                "Rhodiola rosea",
                "Maca root powder",
                "Green tea for natural energy",
                "Beetroot juice",
                "Cordyceps mushroom",
                "Holy basil (Tulsi) tea",
                "Spirulina supplements",
            ],
        },
    },
    CategoryRule {
        name: "back_pain",
        triggers: &["back", "spine"],
        bundle: ContentBundle {
            symptoms: &[
                "Back pain",
                "Spinal discomfort",
                "Lower back stiffness",
                "Muscle tension",
            ],
            causes: &[
                "Poor posture and ergonomics",
                "Muscle strain from overexertion",
                "Sedentary lifestyle",
                "Improper lifting technique",
                "Weak core muscles",
                "Stress and tension",
                "Prolonged sitting",
                "Lack of exercise",
            ],
            deficiencies: &[
                "Vitamin D",
                "Calcium",
                "Magnesium",
                "Vitamin K",
                "Vitamin B12",
            ],
            prevention: &[
                "Maintain good posture while sitting and standing",
                "Strengthen core and back muscles",
                "Use proper lifting techniques",
                "Take regular breaks from sitting",
                "Ergonomic workspace setup",
                "Regular stretching exercises",
                "Maintain healthy weight",
            ],
            cure: &[
                "Apply heat or ice packs alternately",
                "Gentle stretching exercises",
                "Rest but avoid prolonged bed rest",
                "Massage therapy",
                "Physical therapy exercises",
                "Maintain proper posture",
                "Gradual return to normal activities",
            ],
            medicines: &[
                "Ibuprofen (NSAIDs) for pain relief",
                "Acetaminophen for mild pain",
                "Muscle relaxants (prescription)",
                "Topical pain relief creams",
                "Vitamin D and Calcium supplements",
                "⚠️ Consult doctor for persistent or severe pain",
            ],
            yoga: &[
                "Cat-Cow Pose (Marjaryasana-Bitilasana)",
                "Child's Pose (Balasana)",
                "Downward-Facing Dog (Adho Mukha Svanasana)",
                "Cobra Pose (Bhujangasana)",
                "Bridge Pose (Setu Bandhasana)",
                "Spinal Twist (Ardha Matsyendrasana)",
                "Thread the Needle Pose",
            ],
            exercises: &[
                "Core strengthening exercises",
                "Pelvic tilts",
                "Bird-dog exercise",
                "Planks (modified if needed)",
                "Swimming",
                "Walking",
                "Gentle stretching routines",
                "Pilates for core stability",
            ],
            foods_to_eat: &[
                "Dairy products (milk, yogurt, cheese)",
                "Leafy greens (kale, collards)",
                "Fatty fish (salmon, mackerel)",
                "Nuts and seeds",
                "Tofu and soy products",
                "Anti-inflammatory foods (turmeric, ginger)",
                "Berries",
                "Olive oil",
            ],
            foods_to_avoid: &[
                "Processed and fried foods",
                "Excessive sugar",
                "Trans fats",
                "Refined carbohydrates",
                "Alcohol",
                "High-sodium foods",
                "Inflammatory foods",
            ],
            things_to_follow: &[
                "Proper posture always",
                "Regular exercise routine",
                "Ergonomic work environment",
                "Stress management",
                "Adequate sleep on supportive mattress",
                "Maintain healthy weight",
                "Stay active throughout the day",
            ],
            things_to_avoid: &[
                "Prolonged sitting or standing",
                "Heavy lifting without proper technique",
                "Sudden twisting movements",
                "High-impact activities during pain",
                "Smoking (reduces blood flow)",
                "Ignoring pain signals",
                "Bed rest for extended periods",
            ],
            natural_remedies: &[
                "Turmeric (curcumin) supplements",
                "Ginger tea for inflammation",
                "Arnica gel topical application",
                "Epsom salt baths",
                "Devil's claw supplements",
                "White willow bark tea",
                "Capsaicin cream",
                "Hot and cold therapy",
                "Essential oils massage (lavender, peppermint)",
            ],
        },
    },
    CategoryRule {
        name: "chest_discomfort",
        triggers: &["chest", "heart"],
        bundle: ContentBundle {
            symptoms: &[
                "Chest discomfort",
                "Chest tightness",
                "Breathing discomfort",
            ],
            causes: &[
                "Anxiety and stress",
                "Acid reflux (GERD)",
                "Muscle strain",
                "Poor posture",
                "Respiratory issues",
                "Panic attacks",
            ],
            deficiencies: &["Magnesium", "Potassium", "Vitamin D", "CoQ10", "Omega-3"],
            prevention: &[
                "Practice stress management daily",
                "Avoid eating large meals before bed",
                "Maintain healthy weight",
                "Regular cardiovascular exercise",
                "Practice good posture",
                "Avoid trigger foods",
            ],
            cure: &[
                "Deep breathing and relaxation exercises",
                "Meditation techniques",
                "Avoid trigger foods for acid reflux",
                "Elevate head while sleeping",
                "Practice mindfulness",
                "⚠️ EMERGENCY: Seek immediate medical attention if chest pain is severe, persistent, or accompanied by shortness of breath, sweating, nausea, or radiating pain",
            ],
            medicines: &[
                "Antacids for acid reflux",
                "Proton pump inhibitors (PPIs) if prescribed",
                "Anti-anxiety medication if prescribed",
                "Magnesium supplements",
                "⚠️ IMPORTANT: Chest pain requires medical evaluation",
            ],
            yoga: &[
                "Pranayama (deep breathing exercises)",
                "Meditation and mindfulness",
                "Cat-Cow Pose",
                "Cobra Pose (gentle)",
                "Bridge Pose",
                "Corpse Pose for relaxation",
            ],
            exercises: &[
                "Gentle walking",
                "Swimming (if cleared by doctor)",
                "Light stretching",
                "Deep breathing exercises",
                "Yoga for stress relief",
                "⚠️ Avoid vigorous exercise until cleared by doctor",
            ],
            foods_to_eat: &[
                "Oatmeal",
                "Bananas",
                "Leafy greens",
                "Fatty fish",
                "Nuts (almonds, walnuts)",
                "Berries",
                "Avocados",
                "Ginger",
            ],
            foods_to_avoid: &[
                "Spicy foods",
                "Citrus fruits (if acid reflux)",
                "Caffeine",
                "Alcohol",
                "Fried and fatty foods",
                "Carbonated beverages",
                "Chocolate",
                "Tomato-based products",
            ],
            things_to_follow: &[
                "Regular medical checkups",
                "Stress management daily",
                "Proper sleep routine",
                "Small, frequent meals",
                "Relaxation techniques",
                "Monitor symptoms carefully",
            ],
            things_to_avoid: &[
                "High-stress situations",
                "Overeating",
                "Lying down after meals",
                "Smoking",
                "Excessive caffeine",
                "Alcohol consumption",
                "Ignoring symptoms",
            ],
            natural_remedies: &[
                "Ginger tea for digestion",
                "Chamomile tea for relaxation",
                "Aloe vera juice",
                "Licorice root (DGL)",
                "Slippery elm",
                "Lavender aromatherapy",
                "Valerian root for anxiety",
                "Hawthorn supplements (for heart health)",
            ],
        },
    },
];

/// General-wellness bundle. Applied only when no rule in [`RULES`]
/// matched, which keeps every report list non-empty.
pub const FALLBACK: ContentBundle = ContentBundle {
    symptoms: &["General health concerns", "Need for wellness assessment"],
    causes: &[
        "Various lifestyle and environmental factors",
        "Preventive health maintenance needed",
    ],
    deficiencies: &["General nutritional balance recommended"],
    prevention: &[
        "Maintain balanced diet",
        "Regular exercise",
        "Adequate sleep (7-8 hours)",
        "Stress management",
        "Regular health checkups",
        "Stay hydrated",
    ],
    cure: &[
        "Consult healthcare professional for specific diagnosis",
        "Maintain healthy lifestyle habits",
        "Monitor any new symptoms",
        "Keep health journal",
    ],
    medicines: &[
        "Multivitamin supplements",
        "Omega-3 supplements",
        "⚠️ Consult doctor for personalized recommendations",
    ],
    yoga: &[
        "General yoga practice",
        "Pranayama breathing",
        "Meditation",
        "Basic stretching",
        "Sun Salutations",
    ],
    exercises: &[
        "Walking 30 minutes daily",
        "Swimming",
        "Cycling",
        "Strength training",
        "Flexibility exercises",
    ],
    foods_to_eat: &[
        "Fruits and vegetables",
        "Whole grains",
        "Lean proteins",
        "Healthy fats",
        "Nuts and seeds",
    ],
    foods_to_avoid: &[
        "Processed foods",
        "Excessive sugar",
        "Trans fats",
        "Excessive sodium",
    ],
    things_to_follow: &[
        "Regular health screenings",
        "Balanced lifestyle",
        "Adequate rest",
        "Stress management",
        "Social connections",
    ],
    things_to_avoid: &[
        "Sedentary lifestyle",
        "Poor sleep habits",
        "Excessive stress",
        "Unhealthy eating",
    ],
    natural_remedies: &["Green tea", "Turmeric", "Ginger", "Garlic", "Herbal teas"],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_rule_medicines_include_consult_caveat() {
        for rule in RULES {
            assert!(
                rule.bundle.medicines.iter().any(|m| {
                    let lower = m.to_lowercase();
                    lower.contains("consult")
                        || lower.contains("doctor")
                        || lower.contains("blood tests")
                        || lower.contains("medical evaluation")
                }),
                "rule {} has no professional-consult caveat",
                rule.name,
            );
        }
        assert!(FALLBACK.medicines.iter().any(|m| m.contains("Consult doctor")));
    }

    #[test]
    fn chest_rule_carries_emergency_warning() {
        let chest = RULES
            .iter()
            .find(|r| r.name == "chest_discomfort")
            .unwrap();
        assert!(chest.bundle.cure.iter().any(|c| c.starts_with("⚠️ EMERGENCY")));
        assert!(chest
            .bundle
            .medicines
            .iter()
            .any(|m| m.starts_with("⚠️ IMPORTANT")));
    }

    #[test]
    fn no_bundle_field_is_empty() {
        let check = |b: &ContentBundle, name: &str| {
            for (field, items) in [
                ("symptoms", b.symptoms),
                ("causes", b.causes),
                ("deficiencies", b.deficiencies),
                ("prevention", b.prevention),
                ("cure", b.cure),
                ("medicines", b.medicines),
                ("yoga", b.yoga),
                ("exercises", b.exercises),
                ("foods_to_eat", b.foods_to_eat),
                ("foods_to_avoid", b.foods_to_avoid),
                ("things_to_follow", b.things_to_follow),
                ("things_to_avoid", b.things_to_avoid),
                ("natural_remedies", b.natural_remedies),
            ] {
                assert!(!items.is_empty(), "{name}.{field} is empty");
            }
        };
        for rule in RULES {
            check(&rule.bundle, rule.name);
        }
        check(&FALLBACK, "fallback");
    }

    #[test]
    fn triggers_are_lowercase() {
        // Input is lowercased once; triggers must already be normalized.
        for rule in RULES {
            for trigger in rule.triggers {
                assert_eq!(*trigger, trigger.to_lowercase());
            }
        }
    }

    #[test]
    fn head_pain_matches_headache_rule() {
        let rule = &RULES[0];
        assert!(rule.matches("throbbing head pain all morning"));
        assert!(rule.matches("a dull headache"));
        assert!(!rule.matches("sore knee"));
    }
}
