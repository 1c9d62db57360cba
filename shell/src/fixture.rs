use roster::Student;

pub(crate) fn alice() -> Student {
    Student::enrolled("E1")
        .name("Alice")
        .dob("2000-01-01")
        .email("a@x.com")
        .phone(1234567890)
        .branch("CS")
        .course("BTech")
        .semester(3)
}

pub(crate) fn bob() -> Student {
    Student::enrolled("E2")
        .name("Bob")
        .dob("1999-12-31")
        .email("b@x.com")
        .phone(9876543210)
        .branch("EE")
        .course("MTech")
        .semester(1)
}
