//! Static project catalog: buckets, skill tiers, titles and build phases.
//!
//! Every table is a compile-time constant keyed by a closed enum, so lookups
//! cannot miss. String inputs are mapped onto the enums with explicit
//! fallbacks (`ProjectType::resolve`, `SkillTier::from_name`).

use serde::Serialize;

/// Used when the skill tier is unrecognized and no budget was given.
pub const DEFAULT_COST: &str = "₹1000-1500";
/// Used when the skill tier is unrecognized and no duration was given.
pub const DEFAULT_TIME: &str = "2-3 weeks (25 hours)";

// ────────────────────────────────────────────────────────────────────────────
// Enumerations
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    Robotics,
    Iot,
    Electronics,
    Automation,
    Sensors,
}

impl ProjectType {
    pub const ALL: [ProjectType; 5] = [
        ProjectType::Robotics,
        ProjectType::Iot,
        ProjectType::Electronics,
        ProjectType::Automation,
        ProjectType::Sensors,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ProjectType::Robotics => "robotics",
            ProjectType::Iot => "iot",
            ProjectType::Electronics => "electronics",
            ProjectType::Automation => "automation",
            ProjectType::Sensors => "sensors",
        }
    }

    /// Case-insensitive lookup; `None` for anything outside the catalog.
    pub fn from_name(name: &str) -> Option<Self> {
        let normalized = name.to_lowercase();
        Self::ALL.into_iter().find(|t| t.as_str() == normalized)
    }

    /// Like `from_name`, but unknown types fall back to electronics.
    pub fn resolve(name: &str) -> Self {
        Self::from_name(name).unwrap_or(ProjectType::Electronics)
    }

    pub fn bucket(self) -> &'static Bucket {
        match self {
            ProjectType::Robotics => &ROBOTICS,
            ProjectType::Iot => &IOT,
            ProjectType::Electronics => &ELECTRONICS,
            ProjectType::Automation => &AUTOMATION,
            ProjectType::Sensors => &SENSORS,
        }
    }

    pub fn titles(self, tier: SkillTier) -> &'static [&'static str] {
        let table: &'static [&'static [&'static str]; 4] = match self {
            ProjectType::Robotics => &ROBOTICS_TITLES,
            ProjectType::Iot => &IOT_TITLES,
            ProjectType::Electronics => &ELECTRONICS_TITLES,
            ProjectType::Automation => &AUTOMATION_TITLES,
            ProjectType::Sensors => &SENSORS_TITLES,
        };
        table[tier.index()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillTier {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl SkillTier {
    pub const ALL: [SkillTier; 4] = [
        SkillTier::Beginner,
        SkillTier::Intermediate,
        SkillTier::Advanced,
        SkillTier::Expert,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SkillTier::Beginner => "beginner",
            SkillTier::Intermediate => "intermediate",
            SkillTier::Advanced => "advanced",
            SkillTier::Expert => "expert",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let normalized = name.to_lowercase();
        Self::ALL.into_iter().find(|t| t.as_str() == normalized)
    }

    fn index(self) -> usize {
        self as usize
    }

    /// Default time estimate when the caller gives no duration.
    pub fn time_estimate(self) -> &'static str {
        TIME_ESTIMATES[self.index()]
    }

    /// How many of the canonical build phases this tier works through.
    pub fn phase_count(self) -> usize {
        match self {
            SkillTier::Beginner => 8,
            SkillTier::Intermediate => 10,
            SkillTier::Advanced | SkillTier::Expert => BUILD_PHASES.len(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Buckets
// ────────────────────────────────────────────────────────────────────────────

/// Base configuration for one project type.
#[derive(Debug)]
pub struct Bucket {
    pub components: &'static [&'static str],
    pub skills: &'static [&'static str],
    /// Indexed by `SkillTier`.
    pub cost_ranges: [&'static str; 4],
    pub learning_outcomes: &'static [&'static str],
}

impl Bucket {
    pub fn cost_range(&self, tier: SkillTier) -> &'static str {
        self.cost_ranges[tier.index()]
    }
}

static ROBOTICS: Bucket = Bucket {
    components: &[
        "Arduino Uno R3 (ATmega328P Microcontroller)",
        "L298N Motor Driver Module (Dual H-Bridge)",
        "2x BO DC Geared Motors with Wheels (60-200 RPM)",
        "2WD Robot Chassis (Acrylic with Battery Holder)",
        "HC-SR04 Ultrasonic Sensor (2-400cm range)",
        "4xAA Battery Holder with ON/OFF Switch",
        "Jumper Wires (Male-Male, Male-Female)",
        "Mini Breadboard 400 points",
    ],
    skills: &[
        "Arduino programming basics (C/C++)",
        "PWM (Pulse Width Modulation) for motor speed control",
        "Ultrasonic sensor interfacing and distance measurement",
        "H-Bridge motor driver operation and direction control",
        "Robot kinematics and movement logic",
        "Power management for mobile robots",
    ],
    cost_ranges: ["₹800-1200", "₹1200-2000", "₹2000-3500", "₹3500-6000"],
    learning_outcomes: &[
        "Understand basics of mobile robotics and actuation",
        "Learn motor control using PWM signals",
        "Master sensor integration for autonomous behavior",
        "Develop problem-solving skills through robot debugging",
    ],
};

static IOT: Bucket = Bucket {
    components: &[
        "ESP32 DevKit (Dual-core WiFi + Bluetooth)",
        "DHT22 Temperature & Humidity Sensor (High precision)",
        "BMP280 Barometric Pressure Sensor (I2C)",
        "0.96\" OLED Display 128x64 (I2C Interface)",
        "Mini Breadboard with Jumper Wires",
        "5V 2A Power Adapter or USB Cable",
        "Micro USB Cable for Programming",
    ],
    skills: &[
        "ESP32 programming with Arduino IDE/MicroPython",
        "WiFi connectivity and HTTP requests",
        "I2C communication protocol",
        "IoT platforms (ThingSpeak, Blynk, Firebase)",
        "Data visualization and cloud integration",
        "Sensor data processing and filtering",
    ],
    cost_ranges: ["₹600-1000", "₹1000-1800", "₹1800-3000", "₹3000-5000"],
    learning_outcomes: &[
        "Master wireless communication protocols",
        "Learn cloud-based data storage and retrieval",
        "Understand IoT architecture and data flow",
        "Create web dashboards for monitoring",
    ],
};

static ELECTRONICS: Bucket = Bucket {
    components: &[
        "Arduino Nano (Compact ATmega328P board)",
        "Resistor Kit (10Ω to 1MΩ, 1/4W, ±5%)",
        "LED Assortment (5mm - Red, Green, Blue, Yellow, White)",
        "Ceramic Capacitor Kit (10pF to 100nF)",
        "2N2222 NPN Transistors (for switching)",
        "1N4007 Diodes (Rectifier, 1000V 1A)",
        "Solderless Breadboard 830 points",
        "Digital Multimeter for measurements",
    ],
    skills: &[
        "Basic circuit analysis (Ohm's Law, Kirchhoff's Laws)",
        "LED current limiting resistor calculation",
        "Transistor as switch and amplifier",
        "Capacitor charging/discharging characteristics",
        "PCB design fundamentals",
        "Soldering techniques and practices",
    ],
    cost_ranges: ["₹500-900", "₹900-1500", "₹1500-2500", "₹2500-4000"],
    learning_outcomes: &[
        "Build strong foundation in analog electronics",
        "Master breadboard prototyping techniques",
        "Learn to read and create circuit diagrams",
        "Develop systematic troubleshooting skills",
    ],
};

static AUTOMATION: Bucket = Bucket {
    components: &[
        "Arduino Uno R3 / ESP32 (for WiFi control)",
        "4-Channel 5V Relay Module (10A 250V AC rating)",
        "PIR Motion Sensor HC-SR501 (7m range, 120° angle)",
        "LDR (Light Dependent Resistor) with 10kΩ resistor",
        "DHT11 Temperature & Humidity Sensor",
        "16x2 LCD Display with I2C Module",
        "5V 2A Power Supply",
        "Connecting Wires and Terminal Blocks",
    ],
    skills: &[
        "Relay control and isolation techniques",
        "Sensor-based decision making logic",
        "Interrupt handling for motion detection",
        "Home automation protocols",
        "Safety considerations for AC appliances",
        "Timer and scheduling implementations",
    ],
    cost_ranges: ["₹700-1200", "₹1200-2000", "₹2000-3500", "₹3500-5500"],
    learning_outcomes: &[
        "Understand home automation systems",
        "Learn safe AC appliance control",
        "Master sensor fusion for smart decisions",
        "Create practical IoT automation solutions",
    ],
};

static SENSORS: Bucket = Bucket {
    components: &[
        "Arduino Uno R3 (Microcontroller)",
        "DHT22 (Temp & Humidity - High accuracy)",
        "MQ-135 Air Quality Sensor (NH3, NOx, CO2)",
        "BH1750 Digital Light Sensor (I2C, 1-65535 lux)",
        "20x4 LCD Display with I2C",
        "MicroSD Card Module (for data logging)",
        "DS3231 RTC Module (±2ppm accuracy)",
        "Breadboard and Connecting Wires",
    ],
    skills: &[
        "Multi-sensor integration and management",
        "I2C bus communication and addressing",
        "Data logging to SD card (CSV format)",
        "Real-time clock for timestamping",
        "Sensor calibration techniques",
        "Data visualization using Serial Plotter",
    ],
    cost_ranges: ["₹800-1400", "₹1400-2200", "₹2200-3500", "₹3500-5500"],
    learning_outcomes: &[
        "Master sensor interfacing techniques",
        "Learn data acquisition and logging",
        "Understand environmental monitoring systems",
        "Develop data analysis skills",
    ],
};

// ────────────────────────────────────────────────────────────────────────────
// Tier add-ons
// ────────────────────────────────────────────────────────────────────────────

/// Intermediate and above.
pub const UI_COMPONENTS: &[&str] = &[
    "0.96\" OLED Display I2C (128x64) for better UI",
    "Buzzer Module for audio feedback",
];

/// Advanced and above.
pub const WIRELESS_COMPONENTS: &[&str] = &[
    "nRF24L01+ Wireless Module for long-range communication",
    "HC-05 Bluetooth Module for mobile connectivity",
];

/// Expert only.
pub const FABRICATION_COMPONENTS: &[&str] = &[
    "Custom PCB design and fabrication",
    "3D Printed Enclosure with CAD design",
    "Mobile App development (MIT App Inventor / Flutter)",
];

/// Advanced and above.
pub const ADVANCED_SKILLS: &[&str] = &[
    "Version control using Git for code management",
    "PCB design using EasyEDA or KiCad",
    "3D modeling for enclosure design",
];

pub const DEBUGGING_SKILL: &str = "Circuit debugging using multimeter and logic analyzer";
pub const DOCUMENTATION_SKILL: &str = "Technical documentation and project presentation";
pub const SAFETY_SKILL: &str = "Safety practices for electronics and soldering";

const TIME_ESTIMATES: [&str; 4] = [
    "1-2 weeks (8-15 hours total)",
    "2-4 weeks (20-35 hours total)",
    "4-8 weeks (40-70 hours total)",
    "8-12 weeks (80-120 hours total)",
];

// ────────────────────────────────────────────────────────────────────────────
// Titles, indexed by tier
// ────────────────────────────────────────────────────────────────────────────

static ROBOTICS_TITLES: [&[&str]; 4] = [
    &[
        "Line Following Robot for Warehouse Navigation",
        "Obstacle Avoiding Car with Ultrasonic Sensors",
    ],
    &[
        "Bluetooth Controlled Robot with Mobile App",
        "Gesture Controlled Robot using Accelerometer",
    ],
    &[
        "Autonomous Maze Solving Robot with Wall Following",
        "Voice Controlled Robotic Arm with Inverse Kinematics",
    ],
    &[
        "SLAM-based Mapping Robot with ROS",
        "Quadruped Walking Robot with Servo Control",
    ],
];

static IOT_TITLES: [&[&str]; 4] = [
    &[
        "WiFi Weather Station with Web Dashboard",
        "Smart Plant Monitoring System with Alerts",
    ],
    &[
        "IoT Home Security System with Mobile Notifications",
        "Remote Controlled Appliances via Blynk App",
    ],
    &[
        "Multi-Room Environmental Monitoring Network",
        "Smart Energy Meter with Power Analytics",
    ],
    &[
        "Complete Smart Home System with Voice Control",
        "Industrial IoT Sensor Network with MQTT",
    ],
];

static ELECTRONICS_TITLES: [&[&str]; 4] = [
    &[
        "LED Chaser with 555 Timer IC",
        "Temperature Indicator using LM35 and LEDs",
    ],
    &[
        "Digital Voltmeter with LCD Display",
        "Automatic Night Light using LDR and Transistor",
    ],
    &[
        "Function Generator with Multiple Waveforms",
        "Battery Capacity Tester with Data Logging",
    ],
    &[
        "Digital Oscilloscope using Arduino",
        "Impedance Analyzer for Component Testing",
    ],
];

static AUTOMATION_TITLES: [&[&str]; 4] = [
    &[
        "Automatic Room Light using PIR Sensor",
        "Temperature Controlled Fan with LCD",
    ],
    &[
        "Smart Irrigation System with Soil Moisture",
        "Automatic Curtain Controller with Light Sensor",
    ],
    &[
        "Complete Home Automation with Mobile Control",
        "Smart Door Lock with RFID and Keypad",
    ],
    &[
        "Voice Controlled Home with Multiple Zones",
        "AI-based Energy Management System",
    ],
];

static SENSORS_TITLES: [&[&str]; 4] = [
    &[
        "Multi-Sensor Data Logger to SD Card",
        "Room Environment Monitor with OLED Display",
    ],
    &[
        "Air Quality Monitoring Station with Alerts",
        "Weather Station with Wireless Data Upload",
    ],
    &[
        "Portable Environmental Analysis Kit",
        "Industrial Gas Leak Detection System",
    ],
    &[
        "Distributed Sensor Network with Edge Computing",
        "AI-Powered Predictive Maintenance System",
    ],
];

// ────────────────────────────────────────────────────────────────────────────
// Build phases
// ────────────────────────────────────────────────────────────────────────────

/// The canonical build plan. Tiers take a prefix of this list.
pub const BUILD_PHASES: [&str; 12] = [
    "📚 Phase 1: Research & Planning\n   - Study project requirements and objectives\n   - Review datasheets for all components\n   - Create block diagram of system architecture\n   - List all required tools and materials",
    "🎯 Phase 2: Component Procurement\n   - Order components from ATAL-approved vendors\n   - Verify all components upon arrival\n   - Test individual components before integration\n   - Organize components in labeled containers",
    "📐 Phase 3: Circuit Design\n   - Draw circuit schematic on paper/software\n   - Calculate resistor values for LEDs and sensors\n   - Plan breadboard layout for easy debugging\n   - Verify power requirements and ratings",
    "🔌 Phase 4: Breadboard Prototyping\n   - Assemble basic circuit on breadboard\n   - Check all connections with multimeter\n   - Test power supply voltages (3.3V, 5V, 12V)\n   - Ensure proper grounding throughout circuit",
    "💻 Phase 5: Software Development\n   - Set up Arduino IDE with required libraries\n   - Write pseudocode for main logic flow\n   - Implement code in modular functions\n   - Add comments explaining each section",
    "🧪 Phase 6: Component Testing\n   - Test each sensor/module independently\n   - Verify sensor readings with known values\n   - Check actuator responses (motors, relays, LEDs)\n   - Debug any communication issues (I2C, SPI, UART)",
    "🔗 Phase 7: System Integration\n   - Connect all modules to main controller\n   - Test inter-module communication\n   - Implement error handling for failures\n   - Verify complete system functionality",
    "🐛 Phase 8: Debugging & Optimization\n   - Use Serial Monitor for troubleshooting\n   - Optimize code for memory and speed\n   - Add LED indicators for system states\n   - Test edge cases and error conditions",
    "📊 Phase 9: Testing & Validation\n   - Create test cases for all features\n   - Measure and record performance metrics\n   - Compare results with initial requirements\n   - Document any limitations or issues",
    "📦 Phase 10: Enclosure & Finalization\n   - Design enclosure considering ventilation\n   - Add mounting holes for components\n   - Label all external connections\n   - Create user manual with safety warnings",
    "📝 Phase 11: Documentation\n   - Take high-quality photos of project\n   - Create circuit diagrams and flowcharts\n   - Write detailed project report\n   - Prepare demonstration video",
    "🎤 Phase 12: Presentation\n   - Prepare PowerPoint/poster for presentation\n   - Practice explaining project working\n   - Demonstrate all features live\n   - Discuss real-world applications and future scope",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_type_lookup_is_case_insensitive() {
        assert_eq!(ProjectType::from_name("IoT"), Some(ProjectType::Iot));
        assert_eq!(ProjectType::from_name("ROBOTICS"), Some(ProjectType::Robotics));
        assert_eq!(ProjectType::from_name(" iot "), None, "whitespace is not stripped");
        assert_eq!(ProjectType::from_name("drones"), None);
    }

    #[test]
    fn test_unknown_project_type_resolves_to_electronics() {
        assert_eq!(ProjectType::resolve("unknown-type"), ProjectType::Electronics);
        assert_eq!(ProjectType::resolve(""), ProjectType::Electronics);
    }

    #[test]
    fn test_skill_tier_lookup() {
        assert_eq!(SkillTier::from_name("EXPERT"), Some(SkillTier::Expert));
        assert_eq!(SkillTier::from_name("guru"), None);
        assert_eq!(SkillTier::from_name("expert "), None);
    }

    #[test]
    fn test_every_bucket_and_title_list_is_populated() {
        for project_type in ProjectType::ALL {
            let bucket = project_type.bucket();
            assert!(!bucket.components.is_empty(), "{project_type:?} components");
            assert!(!bucket.skills.is_empty(), "{project_type:?} skills");
            assert!(!bucket.learning_outcomes.is_empty());
            for tier in SkillTier::ALL {
                assert!(
                    !project_type.titles(tier).is_empty(),
                    "{project_type:?}/{tier:?} has no titles"
                );
                assert!(bucket.cost_range(tier).starts_with('₹'));
            }
        }
    }

    #[test]
    fn test_phase_counts_by_tier() {
        assert_eq!(SkillTier::Beginner.phase_count(), 8);
        assert_eq!(SkillTier::Intermediate.phase_count(), 10);
        assert_eq!(SkillTier::Advanced.phase_count(), 12);
        assert_eq!(SkillTier::Expert.phase_count(), 12);
    }

    #[test]
    fn test_cost_ranges_follow_tier_order() {
        assert_eq!(ProjectType::Iot.bucket().cost_range(SkillTier::Expert), "₹3000-5000");
        assert_eq!(
            ProjectType::Robotics.bucket().cost_range(SkillTier::Beginner),
            "₹800-1200"
        );
    }
}
