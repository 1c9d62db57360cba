use core::fmt;

use roster::Student;

const RULE: &str = "--------------------------------------------------";

pub(crate) fn print_details(student: &Student, f: &mut impl fmt::Write) -> fmt::Result {
    let details = student.details();
    writeln!(f, "Enrollment No.: {}", student.enroll_id())?;
    writeln!(f, "Name: {}", details.name)?;
    writeln!(f, "Date of Birth: {}", details.dob)?;
    writeln!(f, "Email: {}", details.email)?;
    writeln!(f, "Phone No.: {}", details.phone)?;
    writeln!(f, "Branch: {}", details.branch)?;
    writeln!(f, "Course: {}", details.course)?;
    writeln!(f, "Semester: {}", details.semester)
}

pub(crate) fn print_list(students: &[Student], f: &mut impl fmt::Write) -> fmt::Result {
    writeln!(f, "===== List of Students =====")?;
    writeln!(f)?;
    writeln!(f, "Enrollment No.\t\tName\t\tBranch")?;
    writeln!(f, "{RULE}")?;
    for student in students {
        writeln!(f, "{}\t\t\t{}\t\t{}", student.enroll_id(), student.details().name, student.details().branch)?;
    }
    writeln!(f, "{RULE}")
}

/// Status line followed by a blank separator line.
pub(crate) fn print_message(msg: impl fmt::Display, f: &mut impl fmt::Write) -> fmt::Result {
    writeln!(f, "{msg}")?;
    writeln!(f)
}

pub(crate) struct StandardOut;
impl fmt::Write for StandardOut {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        print!("{}", s);
        Ok(())
    }
}

#[cfg(test)]
pub(crate) struct NilOut;

#[cfg(test)]
impl fmt::Write for NilOut {
    fn write_str(&mut self, _: &str) -> fmt::Result {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::{alice, bob};

    #[test]
    fn test_print_details() {
        let mut s = String::new();
        print_details(&alice(), &mut s).unwrap();

        assert_eq!(s, "\
Enrollment No.: E1
Name: Alice
Date of Birth: 2000-01-01
Email: a@x.com
Phone No.: 1234567890
Branch: CS
Course: BTech
Semester: 3
");
    }

    #[test]
    fn test_print_list() {
        let mut s = String::new();
        print_list(&[alice(), bob()], &mut s).unwrap();

        let lines: Vec<_> = s.lines().collect();
        assert_eq!(lines[0], "===== List of Students =====");
        assert_eq!(lines[1], "");
        assert_eq!(lines[2], "Enrollment No.\t\tName\t\tBranch");
        assert_eq!(lines[3].len(), 50);
        assert_eq!(lines[4], "E1\t\t\tAlice\t\tCS");
        assert_eq!(lines[5], "E2\t\t\tBob\t\tEE");
        assert_eq!(lines[6], lines[3]);
        assert_eq!(lines.len(), 7);
    }

    #[test]
    fn test_print_message() {
        let mut s = String::new();
        print_message("Student added successfully.", &mut s).unwrap();
        assert_eq!(s, "Student added successfully.\n\n");
    }
}
