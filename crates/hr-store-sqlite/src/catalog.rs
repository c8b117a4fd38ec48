//! SQL text of every catalog query, in the SQLite dialect.
//!
//! The statements are opaque to the rest of the system: the store executes
//! them and hands back positional rows, which `hr_core::report` projects.
//! Column order must match the row contract of each [`QueryId`].
//!
//! `median`, `stddev` and `months_between` are provided by
//! [`crate::functions`].

use hr_core::catalog::QueryId;

pub fn sql(id: QueryId) -> &'static str {
  match id {
    QueryId::TopEarners => TOP_EARNERS,
    QueryId::EmployeeHierarchy => EMPLOYEE_HIERARCHY,
    QueryId::DepartmentStats => DEPARTMENT_STATS,
    QueryId::RegionCountry => REGION_COUNTRY,
    QueryId::JobMobility => JOB_MOBILITY,
    QueryId::ManagerSalaryImpact => MANAGER_SALARY_IMPACT,
    QueryId::LongTenureLowSalary => LONG_TENURE_LOW_SALARY,
    QueryId::PromotionPatterns => PROMOTION_PATTERNS,
    QueryId::OverlappingJobs => OVERLAPPING_JOBS,
    QueryId::JobRolesByRegion => JOB_ROLES_BY_REGION,
    QueryId::EmployeeTurnover => EMPLOYEE_TURNOVER,
    QueryId::HiringTrends => HIRING_TRENDS,
    QueryId::SalaryPercentiles => SALARY_PERCENTILES,
    QueryId::NoRecentChanges => NO_RECENT_CHANGES,
    QueryId::SalaryBudget => SALARY_BUDGET,
    QueryId::DepartmentPath => DEPARTMENT_PATH,
    QueryId::HighCommission => HIGH_COMMISSION,
    QueryId::JobTransitions => JOB_TRANSITIONS,
    QueryId::DiverseJobRoles => DIVERSE_JOB_ROLES,
    QueryId::ManagerWorkload => MANAGER_WORKLOAD,
  }
}

// ─── Compensation ────────────────────────────────────────────────────────────

const TOP_EARNERS: &str = "
WITH compensation AS (
    SELECT d.department_name,
           e.first_name || ' ' || e.last_name AS employee_name,
           e.salary,
           COALESCE(e.commission_pct, 0) AS commission_pct,
           e.salary * (1 + COALESCE(e.commission_pct, 0)) AS total_compensation,
           ROW_NUMBER() OVER (
               PARTITION BY e.department_id
               ORDER BY e.salary * (1 + COALESCE(e.commission_pct, 0)) DESC
           ) AS compensation_rank
    FROM employees e
    JOIN departments d ON d.department_id = e.department_id
)
SELECT department_name, employee_name, salary, commission_pct, total_compensation
FROM compensation
WHERE compensation_rank <= 3
ORDER BY department_name, total_compensation DESC
";

const HIGH_COMMISSION: &str = "
SELECT e.first_name || ' ' || e.last_name AS employee_name,
       j.job_title,
       e.salary,
       e.commission_pct,
       e.salary * e.commission_pct AS commission_amount,
       ROUND(e.salary * e.commission_pct / e.salary * 100, 2) AS commission_percentage
FROM employees e
JOIN jobs j ON j.job_id = e.job_id
WHERE e.commission_pct >= 0.3
ORDER BY commission_percentage DESC
";

// ─── Hierarchy and management ────────────────────────────────────────────────

// Siblings are numbered by name under their manager; the zero-padded
// numbers joined along the path give a depth-first sort key.
const EMPLOYEE_HIERARCHY: &str = "
WITH RECURSIVE staff AS (
    SELECT e.employee_id,
           e.manager_id,
           e.first_name || ' ' || e.last_name AS full_name,
           j.job_title,
           d.department_name,
           e.salary,
           ROW_NUMBER() OVER (
               PARTITION BY e.manager_id
               ORDER BY e.last_name, e.first_name
           ) AS sibling_rank
    FROM employees e
    JOIN jobs j        ON j.job_id = e.job_id
    JOIN departments d ON d.department_id = e.department_id
),
tree AS (
    SELECT employee_id,
           1 AS hierarchy_level,
           '' AS indent,
           full_name,
           job_title,
           department_name,
           salary,
           printf('%08d', sibling_rank) AS sort_path
    FROM staff
    WHERE manager_id IS NULL
    UNION ALL
    SELECT s.employee_id,
           t.hierarchy_level + 1,
           t.indent || '  ',
           s.full_name,
           s.job_title,
           s.department_name,
           s.salary,
           t.sort_path || '.' || printf('%08d', s.sibling_rank)
    FROM staff s
    JOIN tree t ON s.manager_id = t.employee_id
)
SELECT hierarchy_level,
       indent || full_name AS employee_name,
       job_title,
       department_name,
       salary
FROM tree
ORDER BY sort_path
";

const MANAGER_SALARY_IMPACT: &str = "
WITH manager_stats AS (
    SELECT m.employee_id AS manager_id,
           m.first_name || ' ' || m.last_name AS manager_name,
           d.department_name,
           AVG(e.salary) AS avg_team_salary,
           (SELECT AVG(salary) FROM employees WHERE department_id = d.department_id)
               AS dept_avg_salary
    FROM employees e
    JOIN employees m   ON m.employee_id = e.manager_id
    JOIN departments d ON d.department_id = e.department_id
    GROUP BY m.employee_id, d.department_id
)
SELECT manager_name,
       department_name,
       ROUND(avg_team_salary, 2) AS avg_team_salary,
       ROUND(dept_avg_salary, 2) AS dept_avg_salary,
       ROUND((avg_team_salary - dept_avg_salary) / dept_avg_salary * 100, 2) AS pct_diff
FROM manager_stats
WHERE avg_team_salary IS NOT NULL
ORDER BY department_name, pct_diff DESC
";

const MANAGER_WORKLOAD: &str = "
SELECT m.first_name || ' ' || m.last_name AS manager_name,
       d.department_name,
       (SELECT COUNT(*) FROM employees e WHERE e.manager_id = m.employee_id)
           AS direct_reports,
       (SELECT SUM(e.salary) FROM employees e WHERE e.manager_id = m.employee_id)
           AS total_team_salary
FROM employees m
JOIN departments d ON d.department_id = m.department_id
WHERE EXISTS (SELECT 1 FROM employees e WHERE e.manager_id = m.employee_id)
ORDER BY direct_reports DESC, total_team_salary DESC
";

// ─── Department aggregates ───────────────────────────────────────────────────

const DEPARTMENT_STATS: &str = "
SELECT d.department_name,
       COUNT(e.employee_id) AS employee_count,
       ROUND(AVG(e.salary), 2) AS avg_salary,
       ROUND(median(e.salary), 2) AS median_salary,
       MIN(e.salary) AS min_salary,
       MAX(e.salary) AS max_salary,
       ROUND(stddev(e.salary), 2) AS stddev_salary
FROM employees e
JOIN departments d ON d.department_id = e.department_id
GROUP BY d.department_id
HAVING COUNT(e.employee_id) >= 5
ORDER BY avg_salary DESC
";

const SALARY_PERCENTILES: &str = "
SELECT d.department_name,
       e.first_name || ' ' || e.last_name AS employee_name,
       e.salary,
       ROUND(PERCENT_RANK() OVER (PARTITION BY e.department_id ORDER BY e.salary) * 100, 2)
           AS salary_percentile
FROM employees e
JOIN departments d ON d.department_id = e.department_id
ORDER BY d.department_name, salary_percentile DESC
";

const HIRING_TRENDS: &str = "
SELECT d.department_name,
       CAST(strftime('%Y', e.hire_date) AS INTEGER) AS hire_year,
       COUNT(e.employee_id) AS hire_count
FROM employees e
JOIN departments d ON d.department_id = e.department_id
GROUP BY d.department_name, hire_year
ORDER BY d.department_name, hire_year
";

// Every employee's title is listed, so a title held twice appears twice.
const DIVERSE_JOB_ROLES: &str = "
SELECT d.department_name,
       COUNT(DISTINCT e.job_id) AS unique_job_count,
       group_concat(j.job_title, ', ' ORDER BY j.job_title) AS job_titles
FROM employees e
JOIN departments d ON d.department_id = e.department_id
JOIN jobs j        ON j.job_id = e.job_id
GROUP BY d.department_id
HAVING COUNT(DISTINCT e.job_id) > 1
ORDER BY unique_job_count DESC
";

const DEPARTMENT_PATH: &str = "
WITH RECURSIVE paths (department_name, location_path, country_id, region_id, depth) AS (
    SELECT d.department_name, l.city, l.country_id, c.region_id, 1
    FROM departments d
    JOIN locations l ON l.location_id = d.location_id
    JOIN countries c ON c.country_id = l.country_id
    UNION ALL
    SELECT p.department_name,
           CASE p.depth
               WHEN 1 THEN c.country_name || ' → ' || p.location_path
               WHEN 2 THEN r.region_name || ' → ' || p.location_path
           END,
           p.country_id,
           p.region_id,
           p.depth + 1
    FROM paths p
    LEFT JOIN countries c ON c.country_id = p.country_id AND p.depth = 1
    LEFT JOIN regions r   ON r.region_id = p.region_id AND p.depth = 2
    WHERE p.depth <= 2
)
SELECT department_name, location_path
FROM paths
WHERE depth = 3
  AND (location_path LIKE 'Americas%' OR location_path LIKE 'Europe%')
ORDER BY department_name, location_path
";

// ─── Geography ───────────────────────────────────────────────────────────────

// ROLLUP(region, country) spelled out as three grouping levels. The grand
// total is omitted when there are no placed employees at all.
const REGION_COUNTRY: &str = "
WITH placed AS (
    SELECT r.region_name, c.country_name, e.employee_id, e.salary
    FROM employees e
    JOIN departments d ON d.department_id = e.department_id
    JOIN locations l   ON l.location_id = d.location_id
    JOIN countries c   ON c.country_id = l.country_id
    JOIN regions r     ON r.region_id = c.region_id
)
SELECT region_name, country_name,
       COUNT(employee_id), ROUND(SUM(salary), 2), ROUND(AVG(salary), 2)
FROM placed
GROUP BY region_name, country_name
UNION ALL
SELECT region_name, NULL,
       COUNT(employee_id), ROUND(SUM(salary), 2), ROUND(AVG(salary), 2)
FROM placed
GROUP BY region_name
UNION ALL
SELECT NULL, NULL,
       COUNT(employee_id), ROUND(SUM(salary), 2), ROUND(AVG(salary), 2)
FROM placed
HAVING COUNT(employee_id) > 0
ORDER BY 1 NULLS LAST, 2 NULLS LAST
";

const JOB_ROLES_BY_REGION: &str = "
WITH current_roles AS (
    SELECT DISTINCT r.region_name, j.job_title
    FROM employees e
    JOIN departments d ON d.department_id = e.department_id
    JOIN locations l   ON l.location_id = d.location_id
    JOIN countries c   ON c.country_id = l.country_id
    JOIN regions r     ON r.region_id = c.region_id
    JOIN jobs j        ON j.job_id = e.job_id
),
past_roles AS (
    SELECT DISTINCT r.region_name, j.job_title
    FROM job_history jh
    JOIN departments d ON d.department_id = jh.department_id
    JOIN locations l   ON l.location_id = d.location_id
    JOIN countries c   ON c.country_id = l.country_id
    JOIN regions r     ON r.region_id = c.region_id
    JOIN jobs j        ON j.job_id = jh.job_id
)
SELECT region_name, job_title FROM current_roles
UNION
SELECT region_name, job_title FROM past_roles
ORDER BY region_name, job_title
";

const SALARY_BUDGET: &str = "
WITH budget AS (
    SELECT r.region_name, d.department_name, SUM(e.salary) AS total_salary
    FROM employees e
    JOIN departments d ON d.department_id = e.department_id
    JOIN locations l   ON l.location_id = d.location_id
    JOIN countries c   ON c.country_id = l.country_id
    JOIN regions r     ON r.region_id = c.region_id
    GROUP BY r.region_name, d.department_name
)
SELECT region_name,
       SUM(CASE WHEN department_name = 'Executive' THEN total_salary END) AS executive,
       SUM(CASE WHEN department_name = 'Sales'     THEN total_salary END) AS sales,
       SUM(CASE WHEN department_name = 'Finance'   THEN total_salary END) AS finance
FROM budget
GROUP BY region_name
ORDER BY region_name
";

// ─── Tenure ──────────────────────────────────────────────────────────────────

const LONG_TENURE_LOW_SALARY: &str = "
WITH job_median AS (
    SELECT job_id, median(salary) AS median_salary
    FROM employees
    GROUP BY job_id
)
SELECT e.employee_id,
       e.first_name || ' ' || e.last_name AS employee_name,
       j.job_title,
       e.salary,
       jm.median_salary,
       ROUND(months_between(date('now'), e.hire_date) / 12, 2) AS years_of_service
FROM employees e
JOIN jobs j        ON j.job_id = e.job_id
JOIN job_median jm ON jm.job_id = e.job_id
WHERE months_between(date('now'), e.hire_date) / 12 > 5
  AND e.salary <= jm.median_salary
ORDER BY years_of_service DESC, e.salary
";

const NO_RECENT_CHANGES: &str = "
SELECT e.employee_id,
       e.first_name || ' ' || e.last_name AS employee_name,
       j.job_title,
       e.hire_date,
       ROUND(months_between(date('now'), e.hire_date) / 12, 2) AS years_of_service
FROM employees e
JOIN jobs j ON j.job_id = e.job_id
LEFT JOIN job_history jh ON jh.employee_id = e.employee_id
WHERE jh.employee_id IS NULL
  AND months_between(date('now'), e.hire_date) / 12 > 5
ORDER BY years_of_service DESC
";

const EMPLOYEE_TURNOVER: &str = "
SELECT CAST(strftime('%Y', end_date) AS INTEGER) AS turnover_year,
       COUNT(*) AS turnover_count
FROM job_history
GROUP BY turnover_year
ORDER BY turnover_year
";

// ─── Job history ─────────────────────────────────────────────────────────────

const JOB_MOBILITY: &str = "
WITH tenure AS (
    SELECT e.employee_id,
           e.first_name || ' ' || e.last_name AS employee_name,
           COUNT(jh.job_id) AS role_count,
           AVG(months_between(jh.end_date, jh.start_date)) AS avg_months
    FROM employees e
    JOIN job_history jh ON jh.employee_id = e.employee_id
    GROUP BY e.employee_id
    HAVING COUNT(jh.job_id) > 1
)
SELECT t.employee_name,
       t.role_count,
       ROUND(t.avg_months, 2) AS avg_months_per_role,
       group_concat(j.job_title, ', ' ORDER BY jh.start_date) AS job_titles
FROM tenure t
JOIN job_history jh ON jh.employee_id = t.employee_id
JOIN jobs j         ON j.job_id = jh.job_id
GROUP BY t.employee_id
ORDER BY t.role_count DESC, avg_months_per_role
";

const PROMOTION_PATTERNS: &str = "
WITH job_changes AS (
    SELECT e.first_name || ' ' || e.last_name AS employee_name,
           j.job_title AS new_job_title,
           j.max_salary AS new_max_salary,
           LAG(jh.job_id)     OVER w AS prev_job_id,
           LAG(j.job_title)   OVER w AS prev_job_title,
           LAG(j.max_salary)  OVER w AS prev_max_salary
    FROM job_history jh
    JOIN employees e ON e.employee_id = jh.employee_id
    JOIN jobs j      ON j.job_id = jh.job_id
    WINDOW w AS (PARTITION BY jh.employee_id ORDER BY jh.start_date)
)
SELECT employee_name,
       prev_job_title,
       new_job_title,
       prev_max_salary,
       new_max_salary,
       ROUND((new_max_salary - prev_max_salary) / prev_max_salary * 100, 2)
           AS salary_increase_pct
FROM job_changes
WHERE prev_job_id IS NOT NULL
  AND new_max_salary > prev_max_salary
ORDER BY salary_increase_pct DESC
";

const OVERLAPPING_JOBS: &str = "
SELECT e.employee_id,
       e.first_name || ' ' || e.last_name AS employee_name,
       jh1.job_id     AS job1_id,
       j1.job_title   AS job1_title,
       jh1.start_date AS job1_start,
       jh1.end_date   AS job1_end,
       jh2.job_id     AS job2_id,
       j2.job_title   AS job2_title,
       jh2.start_date AS job2_start,
       jh2.end_date   AS job2_end
FROM job_history jh1
JOIN job_history jh2 ON jh2.employee_id = jh1.employee_id
JOIN employees e     ON e.employee_id = jh1.employee_id
JOIN jobs j1         ON j1.job_id = jh1.job_id
JOIN jobs j2         ON j2.job_id = jh2.job_id
WHERE jh1.start_date < jh2.start_date
  AND jh1.end_date >= jh2.start_date
ORDER BY e.employee_id, jh1.start_date, jh2.start_date
";

const JOB_TRANSITIONS: &str = "
WITH transitions AS (
    SELECT LAG(jh.job_id) OVER (PARTITION BY jh.employee_id ORDER BY jh.start_date)
               AS from_job_id,
           jh.job_id AS to_job_id
    FROM job_history jh
)
SELECT j1.job_title AS from_job,
       j2.job_title AS to_job,
       COUNT(*) AS transition_count
FROM transitions t
JOIN jobs j1 ON j1.job_id = t.from_job_id
JOIN jobs j2 ON j2.job_id = t.to_job_id
GROUP BY j1.job_title, j2.job_title
ORDER BY transition_count DESC
";
