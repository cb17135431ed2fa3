use gradpath::config::{ConfigSection, CourseConfig, CurriculumFile, RawCurriculumFile};
use gradpath::dag::Curriculum;
use gradpath::types::{CyclePolicy, ValidationMode};

/// Builder for curricula, usable both as a plain [`Curriculum`] and as a
/// validated [`CurriculumFile`] or TOML text.
pub struct CurriculumBuilder {
    config: RawCurriculumFile,
}

impl CurriculumBuilder {
    pub fn new() -> Self {
        Self {
            config: RawCurriculumFile::new(ConfigSection::default()),
        }
    }

    pub fn course(mut self, id: &str, after: &[&str]) -> Self {
        self.config.add_course(id, CourseConfig::after(after.iter().copied()));
        self
    }

    pub fn labeled_course(mut self, id: &str, label: &str, after: &[&str]) -> Self {
        let mut course = CourseConfig::after(after.iter().copied());
        course.label = Some(label.to_string());
        self.config.add_course(id, course);
        self
    }

    pub fn strict(mut self) -> Self {
        self.config.config.validation = ValidationMode::Strict;
        self
    }

    pub fn reject_cycles(mut self) -> Self {
        self.config.config.cycle_policy = CyclePolicy::Reject;
        self
    }

    pub fn raw(self) -> RawCurriculumFile {
        self.config
    }

    pub fn build(self) -> Curriculum {
        self.build_file().curriculum()
    }

    pub fn build_file(self) -> CurriculumFile {
        CurriculumFile::try_from(self.config).expect("Failed to build valid curriculum from builder")
    }

    /// Serialise to TOML in the on-disk format.
    pub fn to_toml(&self) -> String {
        let mut out = String::from("[config]\n");
        let validation = match self.config.config.validation {
            ValidationMode::Lenient => "lenient",
            ValidationMode::Strict => "strict",
        };
        let policy = match self.config.config.cycle_policy {
            CyclePolicy::Degrade => "degrade",
            CyclePolicy::Reject => "reject",
        };
        out.push_str(&format!("validation = \"{validation}\"\n"));
        out.push_str(&format!("cycle_policy = \"{policy}\"\n"));

        for (id, course) in &self.config.course {
            out.push_str(&format!("\n[course.{id:?}]\n"));
            if let Some(label) = &course.label {
                out.push_str(&format!("label = {label:?}\n"));
            }
            let after: Vec<String> = course.after.iter().map(|a| format!("{a:?}")).collect();
            out.push_str(&format!("after = [{}]\n", after.join(", ")));
        }
        out
    }
}

impl Default for CurriculumBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// The Industrial Engineering curriculum also shipped as
/// `demos/industrial-engineering.toml`.
pub fn industrial_engineering() -> CurriculumBuilder {
    CurriculumBuilder::new()
        .course("Calculus 1", &[])
        .course("Calculus 2", &["Calculus 1"])
        .course("Physics 1", &["Calculus 1"])
        .course("Differential Equations", &["Calculus 2"])
        .course("Linear Algebra", &["Calculus 2"])
        .course("Circuits", &["Physics 1", "Differential Equations"])
        .course("Industrial Stats", &["Calculus 2"])
        .course("Quality Control", &["Industrial Stats"])
        .course("Operations Research", &["Linear Algebra", "Industrial Stats"])
        .course("Simulation", &["Operations Research", "Computer Programming"])
        .course("Computer Programming", &[])
        .course(
            "Senior Design Project",
            &["Simulation", "Quality Control", "Circuits"],
        )
}
