use crate::{
    pkg::internal::{adaptors::jobs::spec::NewJobPosting, store::JobRepo},
    prelude::Result,
};

#[derive(Debug, Clone, Copy)]
pub struct JobSeed {
    pub title: &'static str,
    pub location: &'static str,
    pub required_skills: &'static str,
    pub description: &'static str,
}

impl JobSeed {
    fn to_new_posting(self) -> NewJobPosting {
        NewJobPosting {
            title: self.title.to_string(),
            location: self.location.to_string(),
            required_skills: self.required_skills.to_string(),
            description: self.description.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    Created,
    AlreadyExists,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SeedReport {
    pub outcomes: Vec<(String, SeedOutcome)>,
    pub created: usize,
}

impl SeedReport {
    /// Console lines in processing order, ending with the summary.
    pub fn lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self
            .outcomes
            .iter()
            .map(|(title, outcome)| match outcome {
                SeedOutcome::Created => format!("Created: {}", title),
                SeedOutcome::AlreadyExists => format!("Already exists: {}", title),
            })
            .collect();
        lines.push(String::new());
        lines.push(format!("Total created: {} jobs", self.created));
        lines
    }
}

/// Inserts every posting in `seeds` whose title is not stored yet.
///
/// The title lookup and the insert are separate calls, so two seeders running
/// at once can both insert the same title. Run it as a single batch.
pub async fn seed_jobs(repo: &dyn JobRepo, seeds: &[JobSeed]) -> Result<SeedReport> {
    let mut report = SeedReport::default();
    for seed in seeds {
        if repo.exists(seed.title).await? {
            tracing::debug!("job posting {:?} already present", seed.title);
            report
                .outcomes
                .push((seed.title.to_string(), SeedOutcome::AlreadyExists));
            continue;
        }
        let job = repo.insert(seed.to_new_posting()).await?;
        tracing::info!("seeded job posting {} ({})", job.id, &job.title);
        report.created += 1;
        report.outcomes.push((job.title, SeedOutcome::Created));
    }
    Ok(report)
}

pub const JOB_SEEDS: &[JobSeed] = &[
    JobSeed {
        title: "Senior Python Developer",
        location: "Remote",
        required_skills: "Python, Django, REST API, PostgreSQL, Docker, Git",
        description: "\
We are looking for an experienced Python developer to join our team.\n\
\n\
Responsibilities:\n\
- Develop and maintain Python/Django applications\n\
- Design and implement REST APIs\n\
- Optimize database queries and performance\n\
- Collaborate with frontend developers\n\
- Write clean, maintainable code\n\
- Participate in code reviews\n\
\n\
Requirements:\n\
- 5+ years of Python experience\n\
- Strong knowledge of Django framework\n\
- PostgreSQL database experience\n\
- Docker and containerization knowledge\n\
- Git version control\n\
- REST API design principles\n\
- Excellent communication skills\n\
- Problem-solving mindset\n\
\n\
Nice to have:\n\
- AWS or cloud platform experience\n\
- CI/CD pipeline knowledge\n\
- React or frontend framework knowledge\n\
- Machine learning basics",
    },
    JobSeed {
        title: "Frontend Developer",
        location: "New York, NY",
        required_skills: "JavaScript, React, CSS, HTML, Redux, Git",
        description: "\
Join our frontend team and build amazing user experiences.\n\
\n\
Responsibilities:\n\
- Develop responsive web applications with React\n\
- Create reusable UI components\n\
- Implement state management with Redux\n\
- Optimize performance and user experience\n\
- Write unit and integration tests\n\
- Collaborate with UX/UI designers\n\
\n\
Requirements:\n\
- 3+ years of JavaScript experience\n\
- Strong React knowledge\n\
- CSS and HTML expertise\n\
- Redux or similar state management\n\
- Git and GitHub workflow\n\
- Responsive design principles\n\
- Testing libraries (Jest, React Testing Library)\n\
- Browser developer tools proficiency\n\
\n\
Nice to have:\n\
- TypeScript experience\n\
- Next.js or similar framework\n\
- Web accessibility (WCAG)\n\
- Performance optimization\n\
- SEO knowledge",
    },
    JobSeed {
        title: "Full Stack Engineer",
        location: "San Francisco, CA",
        required_skills: "Python, JavaScript, React, Django, PostgreSQL, Docker",
        description: "\
We seek a talented full-stack engineer to build scalable web applications.\n\
\n\
Responsibilities:\n\
- Design and develop full-stack features\n\
- Build robust backend APIs\n\
- Create intuitive frontend interfaces\n\
- Manage databases and optimize queries\n\
- Deploy and maintain applications\n\
- Mentor junior developers\n\
\n\
Requirements:\n\
- 4+ years of full-stack development\n\
- Python backend experience (Django/Flask)\n\
- Modern frontend framework (React/Vue)\n\
- Database design and optimization\n\
- Docker and containerization\n\
- RESTful API design\n\
- Agile development experience\n\
\n\
Nice to have:\n\
- Cloud platform experience (AWS/GCP/Azure)\n\
- Microservices architecture\n\
- GraphQL knowledge\n\
- DevOps practices\n\
- CI/CD implementation",
    },
    JobSeed {
        title: "DevOps Engineer",
        location: "Remote",
        required_skills: "Docker, Kubernetes, AWS, Git, CI/CD, Linux",
        description: "\
Help us build and maintain scalable infrastructure.\n\
\n\
Responsibilities:\n\
- Set up and maintain CI/CD pipelines\n\
- Manage containerized applications\n\
- Deploy to cloud platforms\n\
- Monitor system performance\n\
- Implement infrastructure as code\n\
- Troubleshoot infrastructure issues\n\
\n\
Requirements:\n\
- 3+ years of DevOps experience\n\
- Docker and Kubernetes expertise\n\
- AWS or similar cloud platform\n\
- Linux system administration\n\
- CI/CD tools (Jenkins, GitLab CI, etc.)\n\
- Infrastructure as Code (Terraform, Ansible)\n\
- Monitoring and logging tools\n\
- Python or Bash scripting\n\
\n\
Nice to have:\n\
- Multi-cloud experience\n\
- Kubernetes advanced topics\n\
- Container security\n\
- Cost optimization\n\
- Disaster recovery planning",
    },
    JobSeed {
        title: "Data Engineer",
        location: "Boston, MA",
        required_skills: "Python, SQL, Spark, Hadoop, ETL, Git",
        description: "\
Build data pipelines and analytics infrastructure.\n\
\n\
Responsibilities:\n\
- Design and implement data pipelines\n\
- Create ETL workflows\n\
- Optimize database queries\n\
- Build data warehouses\n\
- Develop data visualization tools\n\
- Ensure data quality\n\
\n\
Requirements:\n\
- 4+ years of data engineering\n\
- Python and SQL expertise\n\
- Apache Spark experience\n\
- ETL pipeline development\n\
- Data warehouse design\n\
- Big Data tools and technologies\n\
- Performance optimization\n\
- Git version control\n\
\n\
Nice to have:\n\
- Machine learning knowledge\n\
- Real-time streaming (Kafka)\n\
- Cloud data platforms\n\
- Data modeling\n\
- BI tools experience",
    },
    JobSeed {
        title: "Machine Learning Engineer",
        location: "Remote",
        required_skills: "Python, TensorFlow, Scikit-learn, PyTorch, SQL",
        description: "\
Develop intelligent systems and ML models.\n\
\n\
Responsibilities:\n\
- Build and train machine learning models\n\
- Implement computer vision solutions\n\
- Natural language processing tasks\n\
- Model optimization and deployment\n\
- Evaluate model performance\n\
- Collaborate with data scientists\n\
\n\
Requirements:\n\
- 3+ years of ML experience\n\
- Python programming expertise\n\
- TensorFlow or PyTorch experience\n\
- Scikit-learn and ML libraries\n\
- SQL database knowledge\n\
- Statistics and mathematics\n\
- Model evaluation techniques\n\
- Git and code versioning\n\
\n\
Nice to have:\n\
- Deep learning experience\n\
- NLP experience\n\
- Computer vision knowledge\n\
- Model deployment experience\n\
- Cloud ML platforms",
    },
    JobSeed {
        title: "Junior Software Developer",
        location: "Remote",
        required_skills: "JavaScript, Python, Git, HTML, CSS",
        description: "\
Start your software development career with us.\n\
\n\
Responsibilities:\n\
- Develop features under mentorship\n\
- Write clean and maintainable code\n\
- Participate in code reviews\n\
- Learn best practices\n\
- Fix bugs and issues\n\
- Contribute to team projects\n\
\n\
Requirements:\n\
- JavaScript or Python knowledge\n\
- HTML and CSS basics\n\
- Git version control\n\
- Problem-solving skills\n\
- Willingness to learn\n\
- Communication skills\n\
- Team collaboration ability\n\
\n\
Nice to have:\n\
- Web development experience\n\
- Computer science degree\n\
- Personal projects or portfolio\n\
- Open source contributions\n\
- Testing knowledge",
    },
    JobSeed {
        title: "QA Engineer",
        location: "Chicago, IL",
        required_skills: "Selenium, Python, SQL, Test Management, Git",
        description: "\
Ensure quality and reliability of our products.\n\
\n\
Responsibilities:\n\
- Design and execute test plans\n\
- Automate test scenarios\n\
- Report and track bugs\n\
- Performance testing\n\
- Regression testing\n\
- Collaborate with developers\n\
\n\
Requirements:\n\
- 2+ years of QA experience\n\
- Selenium or similar automation tools\n\
- Python or JavaScript for automation\n\
- SQL database knowledge\n\
- Test management tools\n\
- Manual and automated testing\n\
- Bug tracking systems\n\
- Git version control\n\
\n\
Nice to have:\n\
- CI/CD integration\n\
- Performance testing tools\n\
- API testing knowledge\n\
- Load testing experience\n\
- Test framework development",
    },
];
