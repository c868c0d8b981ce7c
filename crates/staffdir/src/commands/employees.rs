//! Employee command handlers.

use tabled::Tabled;

use staffdir_core::{DeleteOutcome, Employee, EmployeeStore};

use crate::cli::{AddArgs, DeleteArgs, EditArgs, EmployeeFields, GetArgs, GlobalOpts, ListArgs};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct EmployeeRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Profession")]
    profession: String,
}

impl EmployeeRow {
    fn new(e: &Employee) -> Self {
        Self {
            id: id_of(e),
            name: e.full_name().trim().to_owned(),
            email: e.email.clone().unwrap_or_default(),
            profession: e.profession.clone().unwrap_or_default(),
        }
    }
}

fn id_of(e: &Employee) -> String {
    e.id.map(|id| id.to_string()).unwrap_or_default()
}

fn detail(e: &Employee) -> String {
    [
        format!("ID:          {}", e.id.map_or_else(|| "-".into(), |id| id.to_string())),
        format!("First name:  {}", e.first_name.as_deref().unwrap_or("-")),
        format!("Last name:   {}", e.last_name.as_deref().unwrap_or("-")),
        format!("Email:       {}", e.email.as_deref().unwrap_or("-")),
        format!("Profession:  {}", e.profession.as_deref().unwrap_or("-")),
    ]
    .join("\n")
}

pub(super) fn render_employees(
    global: &GlobalOpts,
    employees: &[Employee],
) -> Result<String, CliError> {
    output::render_list(&global.output, employees, EmployeeRow::new, id_of)
}

fn render_employee(global: &GlobalOpts, employee: &Employee) -> Result<String, CliError> {
    output::render_single(&global.output, employee, detail, id_of)
}

/// Overlay the flags that were given onto `base`.
fn merge(base: Employee, fields: EmployeeFields) -> Employee {
    Employee {
        id: base.id,
        first_name: fields.first_name.or(base.first_name),
        last_name: fields.last_name.or(base.last_name),
        email: fields.email.or(base.email),
        profession: fields.profession.or(base.profession),
    }
}

// ── Handlers ────────────────────────────────────────────────────────

pub async fn list(store: &EmployeeStore, args: ListArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let snapshot = store.fetch_all().await?;
    let employees = match args.search.as_deref() {
        Some(query) => store.search(query),
        None => snapshot.to_vec(),
    };

    output::print_output(&render_employees(global, &employees)?, global.quiet);
    Ok(())
}

pub async fn get(store: &EmployeeStore, args: GetArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let id = util::parse_id(&args.id)?;
    store.fetch_all().await?;

    let employee = store.find_by_id(id).ok_or_else(|| CliError::NotFound {
        identifier: id.to_string(),
    })?;
    output::print_output(&render_employee(global, &employee)?, global.quiet);
    Ok(())
}

pub async fn add(store: &EmployeeStore, args: AddArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let created = store.create(merge(Employee::default(), args.fields)).await?;

    output::print_status(
        &format!("Created employee {}", created.display_name()),
        global,
    );
    output::print_output(&render_employee(global, &created)?, global.quiet);
    Ok(())
}

pub async fn edit(store: &EmployeeStore, args: EditArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let id = util::parse_id(&args.id)?;
    if args.fields.is_empty() {
        return Err(CliError::Validation {
            field: "fields".into(),
            reason: "nothing to change; pass at least one field flag".into(),
        });
    }

    store.fetch_all().await?;
    let index = util::position_of(store, id)?;
    let existing = store.find_by_id(id).ok_or_else(|| CliError::NotFound {
        identifier: id.to_string(),
    })?;

    let updated = store.update_at(index, merge(existing, args.fields)).await?;

    output::print_status(
        &format!("Updated employee {}", updated.display_name()),
        global,
    );
    output::print_output(&render_employee(global, &updated)?, global.quiet);
    Ok(())
}

pub async fn delete(
    store: &EmployeeStore,
    args: DeleteArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let id = util::parse_id(&args.id)?;

    if !util::confirm(&format!("Delete employee {id}?"), "delete", global.yes)? {
        output::print_status("Aborted", global);
        return Ok(());
    }

    store.fetch_all().await?;
    let index = util::position_of(store, id)?;

    match store.delete_at(index, &args.id).await {
        DeleteOutcome::Deleted => {
            output::print_status(&format!("Deleted employee {id}"), global);
            Ok(())
        }
        DeleteOutcome::RolledBack(err) => {
            output::print_warning(
                &format!("Server rejected the delete; employee {id} was restored"),
                global,
            );
            Err(err.into())
        }
        DeleteOutcome::RemoteFailed(err) | DeleteOutcome::Rejected(err) => Err(err.into()),
    }
}
