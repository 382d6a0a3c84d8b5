use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;

use super::{Visibility, require_slug};
use crate::domain::{
    Course, CourseField, CourseForm, CourseLesson, CourseLessonField, CourseLessonForm,
    Publishable,
};
use crate::error::DomainError;
use crate::ports::Repository;
use crate::query::{Entity, Filter, OrderBy};

/// A course with its published lessons in teaching order.
#[derive(Debug, Clone, Serialize)]
pub struct CourseDetails {
    #[serde(flatten)]
    pub course: Course,
    pub lessons: Vec<CourseLesson>,
}

#[derive(Clone)]
pub struct CourseService {
    courses: Arc<dyn Repository<Course>>,
    lessons: Arc<dyn Repository<CourseLesson>>,
}

impl CourseService {
    pub fn new(
        courses: Arc<dyn Repository<Course>>,
        lessons: Arc<dyn Repository<CourseLesson>>,
    ) -> Self {
        Self { courses, lessons }
    }

    fn visibility(scope: Visibility) -> Option<Filter<CourseField>> {
        scope
            .published_only()
            .then(|| Filter::eq(CourseField::IsPublished, true))
    }

    pub async fn course_by_id(&self, id: i32) -> Result<Option<CourseDetails>, DomainError> {
        match self.courses.get_by_id(id).await? {
            Some(course) => Ok(Some(self.with_lessons(course).await?)),
            None => Ok(None),
        }
    }

    pub async fn course_by_slug(&self, slug: &str) -> Result<Option<CourseDetails>, DomainError> {
        let slug = require_slug(slug)?;
        match self
            .courses
            .first_or_default(Filter::eq(CourseField::Slug, slug))
            .await?
        {
            Some(course) => Ok(Some(self.with_lessons(course).await?)),
            None => Ok(None),
        }
    }

    pub async fn all_courses(&self, scope: Visibility) -> Result<Vec<Course>, DomainError> {
        Ok(self
            .courses
            .list(
                Self::visibility(scope),
                OrderBy::desc(CourseField::CreatedAt),
                None,
            )
            .await?)
    }

    pub async fn featured_courses(&self) -> Result<Vec<Course>, DomainError> {
        let filter = Filter::eq(CourseField::IsPublished, true)
            .and(Filter::eq(CourseField::IsFeatured, true));
        Ok(self
            .courses
            .list(Some(filter), OrderBy::desc(CourseField::CreatedAt), None)
            .await?)
    }

    pub async fn course_count(&self, scope: Visibility) -> Result<u64, DomainError> {
        Ok(self.courses.count(Self::visibility(scope)).await?)
    }

    pub async fn create_course(&self, form: &CourseForm) -> Result<Course, DomainError> {
        form.validate()?;
        let now = Utc::now();
        let mut course = form.to_course(now);
        course.stamp_publication(now);

        let course = self.courses.add(course).await?;
        tracing::info!(course_id = course.id, slug = %course.slug, "Course created");
        Ok(course)
    }

    pub async fn update_course(&self, id: i32, form: &CourseForm) -> Result<Course, DomainError> {
        form.validate()?;
        let mut course = self
            .courses
            .get_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(Course::NAME, id))?;

        let now = Utc::now();
        form.apply_to(&mut course);
        course.updated_at = Some(now);
        course.stamp_publication(now);

        let course = self.courses.update(course).await?;
        tracing::info!(course_id = id, "Course updated");
        Ok(course)
    }

    /// Deletes the course and all of its lessons.
    pub async fn delete_course(&self, id: i32) -> Result<bool, DomainError> {
        let Some(course) = self.courses.get_by_id(id).await? else {
            return Ok(false);
        };

        let lessons = self
            .lessons
            .list(
                Some(Filter::eq(CourseLessonField::CourseId, id)),
                OrderBy::asc(CourseLessonField::Id),
                None,
            )
            .await?;
        for lesson in lessons {
            self.lessons.delete(lesson).await?;
        }

        self.courses.delete(course).await?;
        tracing::info!(course_id = id, "Course deleted");
        Ok(true)
    }

    // --- lessons ---

    pub async fn course_lessons(
        &self,
        course_id: i32,
        scope: Visibility,
    ) -> Result<Vec<CourseLesson>, DomainError> {
        let filter = Filter::all_of([
            Some(Filter::eq(CourseLessonField::CourseId, course_id)),
            scope
                .published_only()
                .then(|| Filter::eq(CourseLessonField::IsPublished, true)),
        ]);
        Ok(self
            .lessons
            .list(filter, OrderBy::asc(CourseLessonField::OrderIndex), None)
            .await?)
    }

    pub async fn lesson_by_id(&self, id: i32) -> Result<Option<CourseLesson>, DomainError> {
        Ok(self.lessons.get_by_id(id).await?)
    }

    pub async fn lesson_by_slug(
        &self,
        course_id: i32,
        slug: &str,
    ) -> Result<Option<CourseLesson>, DomainError> {
        let slug = require_slug(slug)?;
        let filter = Filter::eq(CourseLessonField::CourseId, course_id)
            .and(Filter::eq(CourseLessonField::Slug, slug));
        Ok(self.lessons.first_or_default(filter).await?)
    }

    pub async fn create_lesson(&self, form: &CourseLessonForm) -> Result<CourseLesson, DomainError> {
        form.validate()?;
        self.ensure_course(form.course_id).await?;

        let lesson = self.lessons.add(form.to_lesson(Utc::now())).await?;
        tracing::info!(
            lesson_id = lesson.id,
            course_id = lesson.course_id,
            "Lesson created"
        );
        Ok(lesson)
    }

    pub async fn update_lesson(
        &self,
        id: i32,
        form: &CourseLessonForm,
    ) -> Result<CourseLesson, DomainError> {
        form.validate()?;
        let mut lesson = self
            .lessons
            .get_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(CourseLesson::NAME, id))?;
        if lesson.course_id != form.course_id {
            self.ensure_course(form.course_id).await?;
        }

        form.apply_to(&mut lesson);
        lesson.updated_at = Some(Utc::now());
        Ok(self.lessons.update(lesson).await?)
    }

    pub async fn delete_lesson(&self, id: i32) -> Result<bool, DomainError> {
        let Some(lesson) = self.lessons.get_by_id(id).await? else {
            return Ok(false);
        };
        self.lessons.delete(lesson).await?;
        tracing::info!(lesson_id = id, "Lesson deleted");
        Ok(true)
    }

    async fn with_lessons(&self, course: Course) -> Result<CourseDetails, DomainError> {
        let lessons = self
            .course_lessons(course.id, Visibility::PublishedOnly)
            .await?;
        Ok(CourseDetails { course, lessons })
    }

    async fn ensure_course(&self, course_id: i32) -> Result<(), DomainError> {
        if self.courses.get_by_id(course_id).await?.is_none() {
            return Err(DomainError::invalid("Course does not exist"));
        }
        Ok(())
    }
}
