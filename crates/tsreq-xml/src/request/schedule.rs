//! Schedules and the tasks attached to them.

use tsreq_core::{RequestError, RequestResult};
use tsreq_model::ScheduleItem;
use tsreq_model::types::TaskType;

use super::shared::{add_frequency, add_ref, required};
use crate::fields::{Field, apply, display, fields, non_empty, non_zero};
use crate::session::{XmlRequest, ts_request};

const UPDATE: &[Field<ScheduleItem>] = fields!(ScheduleItem {
    "name" => |s| non_empty(s.name.as_ref()),
    "priority" => |s| non_zero(s.priority),
    "executionOrder" => |s| display(s.execution_order),
    "state" => |s| display(s.state),
});

/// Create a schedule.
///
/// Name, priority, type, execution order and interval are all required.
pub fn create(item: &ScheduleItem) -> RequestResult<XmlRequest> {
    let name = required(item.name.as_ref(), "schedule", "name")?;
    let priority = item
        .priority
        .ok_or_else(|| RequestError::missing("schedule", "priority"))?;
    let schedule_type = item
        .schedule_type
        .ok_or_else(|| RequestError::missing("schedule", "schedule_type"))?;
    let execution_order = item
        .execution_order
        .ok_or_else(|| RequestError::missing("schedule", "execution_order"))?;
    let interval = item
        .interval
        .as_ref()
        .ok_or_else(|| RequestError::missing("schedule", "interval"))?;

    ts_request("schedule.create", |s| {
        let el = s.add("schedule");
        el.set("name", name)
            .set("priority", priority.to_string())
            .set("type", schedule_type.as_str())
            .set("executionOrder", execution_order.as_str());
        add_frequency(el, interval);
        Ok(())
    })
}

/// Update a schedule. Only populated settings are sent.
pub fn update(item: &ScheduleItem) -> RequestResult<XmlRequest> {
    ts_request("schedule.update", |s| {
        let el = s.add("schedule");
        apply(el, item, UPDATE);
        if let Some(interval) = &item.interval {
            add_frequency(el, interval);
        }
        Ok(())
    })
}

/// Attach a workbook task. The task type defaults to an extract refresh.
pub fn add_workbook(id: Option<&str>, task_type: Option<TaskType>) -> RequestResult<XmlRequest> {
    add_task("workbook", id, task_type.unwrap_or(TaskType::ExtractRefresh))
}

/// Attach a data source task. The task type defaults to an extract refresh.
pub fn add_datasource(id: Option<&str>, task_type: Option<TaskType>) -> RequestResult<XmlRequest> {
    add_task("datasource", id, task_type.unwrap_or(TaskType::ExtractRefresh))
}

/// Attach a flow task. The task type defaults to a flow run.
pub fn add_flow(id: Option<&str>, task_type: Option<TaskType>) -> RequestResult<XmlRequest> {
    add_task("flow", id, task_type.unwrap_or(TaskType::RunFlow))
}

fn add_task(
    target: &'static str,
    id: Option<&str>,
    task_type: TaskType,
) -> RequestResult<XmlRequest> {
    let id = id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| RequestError::missing("schedule task", "id"))?;
    ts_request("schedule.add_task", |s| {
        let task = s.add("task").child(task_type.as_str());
        add_ref(task, target, id);
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use chrono::NaiveTime;
    use tsreq_model::types::{ActiveState, ExecutionOrder, ScheduleType};
    use tsreq_model::{Interval, MonthDay};

    use super::*;

    fn nightly() -> ScheduleItem {
        ScheduleItem {
            name: Some("Nightly".to_owned()),
            priority: Some(50),
            schedule_type: Some(ScheduleType::Extract),
            execution_order: Some(ExecutionOrder::Parallel),
            state: None,
            interval: Some(Interval::Monthly {
                start_time: NaiveTime::from_hms_opt(1, 0, 0).expect("valid time"),
                day: MonthDay::LastDay,
            }),
        }
    }

    #[test]
    fn test_should_render_created_schedule() {
        let req = create(&nightly()).expect("valid request");
        assert_eq!(
            req.to_text(),
            concat!(
                r#"<tsRequest><schedule name="Nightly" priority="50" type="Extract" "#,
                r#"executionOrder="Parallel" frequency="Monthly">"#,
                r#"<frequencyDetails start="01:00:00"><intervals><interval monthDay="LastDay"/>"#,
                "</intervals></frequencyDetails></schedule></tsRequest>"
            )
        );
    }

    #[test]
    fn test_should_reject_schedule_without_interval() {
        let item = ScheduleItem {
            interval: None,
            ..nightly()
        };
        let err = create(&item).expect_err("should fail");
        assert_eq!(err, RequestError::missing("schedule", "interval"));
    }

    #[test]
    fn test_should_omit_zero_priority_on_update() {
        let item = ScheduleItem {
            name: None,
            priority: Some(0),
            schedule_type: None,
            execution_order: None,
            state: Some(ActiveState::Suspended),
            interval: None,
        };
        let req = update(&item).expect("valid request");
        assert_eq!(req.to_text(), r#"<tsRequest><schedule state="Suspended"/></tsRequest>"#);
    }

    #[test]
    fn test_should_render_task_with_default_type() {
        let req = add_workbook(Some("wb1"), None).expect("valid request");
        assert_eq!(
            req.to_text(),
            r#"<tsRequest><task><extractRefresh><workbook id="wb1"/></extractRefresh></task></tsRequest>"#
        );
        let out = add_flow(Some("f1"), None).expect("valid request").to_text();
        assert!(out.contains(r#"<runFlow><flow id="f1"/></runFlow>"#));
    }

    #[test]
    fn test_should_honor_explicit_task_type() {
        let out = add_datasource(Some("ds1"), Some(TaskType::DataAcceleration))
            .expect("valid request")
            .to_text();
        assert!(out.contains(r#"<dataAcceleration><datasource id="ds1"/></dataAcceleration>"#));
    }

    #[test]
    fn test_should_reject_task_without_id() {
        let err = add_datasource(None, None).expect_err("should fail");
        assert_eq!(err, RequestError::missing("schedule task", "id"));
    }
}
