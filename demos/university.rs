use relbag::{
    algebra, evaluate, explain, Expression, LoadOptions, Predicate, Relation, RelationBuilder,
    Type,
};

const DEPARTMENT: &str = "\
Biology,Watson,90000
Comp. Sci.,Taylor,100000
Elec. Eng.,Taylor,85000
Physics,Watson,70000
Statistics,Taylor,50
";

const CLASSROOM: &str = "\
Packard,101,500
Painter,514,10
Taylor,3128,70
Taylor,3130,120
Watson,100,30
Watson,120,50
";

const INSTRUCTOR: &str = "\
10101,Srinivasan,Comp. Sci.,65000
12121,Wu,Finance,90000
58583,Califieri,History,62000
76543,Singh,Statistics,80000
76766,Crick,Biology,72000
95709,Sakurai,Statistics,68000
98345,Kim,Elec. Eng.,80000
";

const TEACHES: &str = "\
10101,101,1,Fall,2009
10101,315,1,Spring,2010
95709,747,1,Spring,2010
95709,319,1,Spring,2010
76766,748,1,Summer,2009
";

const COURSE: &str = "\
101,Intro. to Computer Science,Comp. Sci.,4
315,Robotics,Comp. Sci.,3
319,World History,History,3
747,Database System Concepts,Statistics,4
748,Genetics,Biology,4
";

const PREREQ: &str = "\
748,101
319,315
747,101
";

const TAKES: &str = "\
128,748,1,Fall,2003,A
128,747,1,Fall,2009,A
12345,748,1,Fall,2003,B
45678,748,1,Fall,2003,A
";

fn load(
    name: &str,
    attributes: &[&str],
    types: &[Type],
    data: &str,
) -> anyhow::Result<Relation> {
    let mut relation = RelationBuilder::new()
        .name(name)
        .attribute_names(attributes)
        .attribute_types(types)
        .build()?;
    relation.load(data.as_bytes(), &LoadOptions::default())?;
    Ok(relation)
}

fn text_is(attribute: &str, value: &'static str) -> Predicate {
    Predicate::new(&[attribute], move |c| c[0].as_text() == Some(value))
}

fn main() -> anyhow::Result<()> {
    let department = load(
        "department",
        &["dept_name", "building", "budget"],
        &[Type::Text, Type::Text, Type::Real],
        DEPARTMENT,
    )?;
    let classroom = load(
        "classroom",
        &["building", "room_number", "capacity"],
        &[Type::Text, Type::Integer, Type::Integer],
        CLASSROOM,
    )?;
    let instructor = load(
        "instructor",
        &["instructor_id", "instructor_name", "department", "salary"],
        &[Type::Integer, Type::Text, Type::Text, Type::Real],
        INSTRUCTOR,
    )?;
    let teaches = load(
        "teaches",
        &["instructor_id", "course_id", "sec_id", "semester", "year"],
        &[Type::Integer, Type::Integer, Type::Integer, Type::Text, Type::Integer],
        TEACHES,
    )?;
    let course = load(
        "course",
        &["course_id", "title", "dept_name", "credits"],
        &[Type::Integer, Type::Text, Type::Text, Type::Integer],
        COURSE,
    )?;
    let prereq = load(
        "prereq",
        &["course_id", "prereq_id"],
        &[Type::Integer, Type::Integer],
        PREREQ,
    )?;
    let takes = load(
        "takes",
        &["ID", "course_id", "sec_id", "semester", "year", "grade"],
        &[Type::Integer, Type::Integer, Type::Integer, Type::Text, Type::Integer, Type::Text],
        TAKES,
    )?;

    // Classrooms in the Taylor building that can hold more than 70 students.
    let large = Predicate::new(&["capacity"], |c| c[0].as_integer() > Some(70));
    let query = department
        .builder()
        .join(&classroom)
        .select(text_is("building", "Taylor").and(&large))
        .project(&["building", "room_number", "capacity"])
        .build();
    println!("{}\n{}\n", explain(&query), evaluate(&query)?);

    // Courses taught by Sakurai.
    let query = instructor
        .builder()
        .join(&teaches)
        .select(text_is("instructor_name", "Sakurai"))
        .join(&course)
        .project(&["course_id", "title"])
        .build();
    println!("{}\n{}\n", explain(&query), evaluate(&query)?);

    // Prerequisites of Biology courses.
    let query = course
        .builder()
        .join(&prereq)
        .select(text_is("dept_name", "Biology"))
        .project(&["course_id", "prereq_id"])
        .build();
    println!("{}\n{}\n", explain(&query), evaluate(&query)?);

    // Statistics instructors without a salary above 70000.
    let high = Predicate::new(&["salary"], |c| c[0].as_real() > Some(70000.0));
    let statistics = algebra::select(&instructor, &text_is("department", "Statistics"))?;
    let paid = algebra::select(&instructor, &high)?;
    let result = algebra::project(
        &algebra::diff(&statistics, &paid)?,
        &["instructor_id", "instructor_name"],
    )?;
    println!("{}\n", result);

    // Students who got an A in course 748 in 2003.
    let query = takes
        .builder()
        .select(Predicate::with_schema(
            &["ID", "course_id", "sec_id", "semester", "year", "grade"],
            |row| {
                row[5].as_text() == Some("A")
                    && row[4].as_integer() == Some(2003)
                    && row[1].as_integer() == Some(748)
            },
        ))
        .project(&["ID"])
        .build();
    println!("{}\n{}", explain(&query), evaluate(&query)?);

    Ok(())
}
