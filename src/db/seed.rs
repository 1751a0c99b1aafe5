use anyhow::Result;
use sqlx::PgPool;
use uuid::Uuid;

struct SeedProfile<'a> {
    user_id: &'a str,
    name: &'a str,
    user_type: &'a str,
    monitored_user_id: Option<&'a str>,
}

pub async fn seed_all(pool: &PgPool) -> Result<()> {
    seed_profiles(pool).await?;
    Ok(())
}

/// Default demo pair: one caregiver watching one monitored parent. Existing
/// profiles are left untouched.
async fn seed_profiles(pool: &PgPool) -> Result<()> {
    let profiles = [
        SeedProfile {
            user_id: "1",
            name: "Alex Carter",
            user_type: "caregiver",
            monitored_user_id: Some("2"),
        },
        SeedProfile {
            user_id: "2",
            name: "Margaret Carter",
            user_type: "parent",
            monitored_user_id: None,
        },
    ];

    for profile in profiles {
        let result = sqlx::query(
            r#"
            INSERT INTO user_profiles (id, user_id, name, user_type, monitored_user_id)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (user_id) DO NOTHING
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(profile.user_id)
        .bind(profile.name)
        .bind(profile.user_type)
        .bind(profile.monitored_user_id)
        .execute(pool)
        .await?;

        if result.rows_affected() > 0 {
            tracing::info!("Seeded {} profile for user {}", profile.user_type, profile.user_id);
        }
    }

    Ok(())
}
