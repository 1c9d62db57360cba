/// Everything recorded about a student except the enrollment number.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Details {
    pub name: String,
    pub dob: String,
    pub email: String,
    pub phone: i64,
    pub branch: String,
    pub course: String,
    pub semester: i32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Student {
    enroll_id: Box<str>,
    details: Details,
}

impl Student {
    pub fn new(enroll_id: &str, details: Details) -> Self {
        Self {
            enroll_id: Box::from(enroll_id),
            details,
        }
    }

    /// Starts a student with empty details, to be filled in with the
    /// builder methods.
    pub fn enrolled(enroll_id: &str) -> Self {
        Self::new(enroll_id, Details::default())
    }

    pub fn name(mut self, name: &str) -> Self {
        self.details.name = name.to_string();
        self
    }

    pub fn dob(mut self, dob: &str) -> Self {
        self.details.dob = dob.to_string();
        self
    }

    pub fn email(mut self, email: &str) -> Self {
        self.details.email = email.to_string();
        self
    }

    pub fn phone(mut self, phone: i64) -> Self {
        self.details.phone = phone;
        self
    }

    pub fn branch(mut self, branch: &str) -> Self {
        self.details.branch = branch.to_string();
        self
    }

    pub fn course(mut self, course: &str) -> Self {
        self.details.course = course.to_string();
        self
    }

    pub fn semester(mut self, semester: i32) -> Self {
        self.details.semester = semester;
        self
    }

    pub fn enroll_id(&self) -> &str {
        &self.enroll_id
    }

    pub fn details(&self) -> &Details {
        &self.details
    }

    pub(crate) fn replace_details(&mut self, details: Details) {
        self.details = details;
    }
}
