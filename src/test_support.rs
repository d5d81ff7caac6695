use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A minimal registered task definition as returned by `DescribeTaskDefinition`.
pub(crate) const DESCRIBED_TASK_DEFINITION: &str = r#"{
  "taskDefinitionArn": "arn:aws:ecs:eu-west-1:123456789012:task-definition/web:12",
  "family": "web",
  "revision": 12,
  "status": "ACTIVE",
  "compatibilities": ["EC2", "FARGATE"],
  "requiresAttributes": [{"name": "ecs.capability.execution-role-awslogs"}],
  "registeredAt": "2024-03-01T10:00:00.000Z",
  "registeredBy": "arn:aws:iam::123456789012:user/deploy",
  "networkMode": "awsvpc",
  "cpu": "256",
  "memory": "512",
  "placementConstraints": [],
  "volumes": [],
  "requiresCompatibilities": ["FARGATE"],
  "containerDefinitions": [
    {
      "name": "app",
      "image": "123456789012.dkr.ecr.eu-west-1.amazonaws.com/web:latest",
      "essential": true,
      "portMappings": [{"containerPort": 8080, "hostPort": 8080, "protocol": "tcp"}],
      "environment": [],
      "mountPoints": [],
      "volumesFrom": [],
      "command": null,
      "cpu": 0
    }
  ]
}"#;

/// Write `content` to `name` inside `dir` and return the full path.
pub(crate) fn write_fixture(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

pub(crate) fn read_fixture(path: &Path) -> String {
    std::fs::read_to_string(path).unwrap()
}
