use serde::Serialize;
use tera::{Context, Tera};

use crate::error::Result;

pub const COMPOSE_FILE: &str = "docker-compose.yml";

const COMPOSE_TEMPLATE: &str = r#"version: '3.8'

services:
  postgres:
    image: {{ postgres_image }}
    environment:
      POSTGRES_USER: {{ db_user }}
      POSTGRES_PASSWORD: {{ db_password }}
      POSTGRES_DB: {{ db_name }}
    volumes:
      - postgres_data:/var/lib/postgresql/data
    ports:
      - "{{ db_port }}:5432"
    healthcheck:
      test: ["CMD-SHELL", "pg_isready -U {{ db_user }}"]
      interval: 10s
      timeout: 5s
      retries: 5

  formbricks:
    image: {{ app_image }}
    depends_on:
      postgres:
        condition: service_healthy
    environment:
      DATABASE_URL: "postgresql://{{ db_user }}:{{ db_password }}@postgres:5432/{{ db_name }}"
      NEXTAUTH_SECRET: "{{ nextauth_secret }}"
      NEXTAUTH_URL: "{{ public_url }}"
    ports:
      - "{{ app_port }}:3000"
    healthcheck:
      test: ["CMD", "curl", "-f", "http://localhost:3000/api/health"]
      interval: 10s
      timeout: 5s
      retries: 5

volumes:
  postgres_data:
"#;

#[derive(Debug, Clone, Serialize)]
pub struct ComposeSettings {
    pub postgres_image: String,
    pub app_image: String,
    pub db_user: String,
    pub db_password: String,
    pub db_name: String,
    pub db_port: u16,
    pub app_port: u16,
    pub nextauth_secret: String,
    pub public_url: String,
}

impl Default for ComposeSettings {
    fn default() -> Self {
        Self {
            postgres_image: "postgres:15-alpine".to_string(),
            app_image: "formbricks/formbricks:latest".to_string(),
            db_user: "formbricks".to_string(),
            db_password: "formbricks".to_string(),
            db_name: "formbricks".to_string(),
            db_port: 5432,
            app_port: 3000,
            nextauth_secret: "your-secret-key-change-in-production".to_string(),
            public_url: "http://localhost:3000".to_string(),
        }
    }
}

pub fn render_manifest(settings: &ComposeSettings) -> Result<String> {
    let ctx = Context::from_serialize(settings)?;
    Ok(Tera::one_off(COMPOSE_TEMPLATE, &ctx, false)?)
}
