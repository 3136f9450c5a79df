//! The built-in template catalog.

use crate::Template;

/// Name of the template whose code seeds a new editor session.
pub const DEFAULT_TEMPLATE_NAME: &str = "Basic Component";

const BASIC_COMPONENT: &str = r#"<template>
  <div class="basic-component">
    <h1>{{ title }}</h1>
    <p>{{ description }}</p>
    <el-button type="primary" @click="handleClick">{{ buttonText }}</el-button>
  </div>
</template>

<script setup>
const props = defineProps({
  title: {
    type: String,
    default: 'Title'
  },
  description: {
    type: String,
    default: 'This is a description'
  },
  buttonText: {
    type: String,
    default: 'Click me'
  }
})

const emit = defineEmits(['click'])

const handleClick = () => {
  emit('click', 'Button clicked')
}
</script>

<style scoped>
.basic-component {
  padding: 20px;
  text-align: center;
}
</style>"#;

const CARD_COMPONENT: &str = r#"<template>
  <el-card :header="title" class="card-component">
    <p>{{ content }}</p>
    <div class="card-footer">
      <el-button type="primary" size="small">{{ buttonText }}</el-button>
    </div>
  </el-card>
</template>

<script setup>
const props = defineProps({
  title: {
    type: String,
    default: 'Card title'
  },
  content: {
    type: String,
    default: 'This is the card content'
  },
  buttonText: {
    type: String,
    default: 'Action'
  }
})
</script>

<style scoped>
.card-component {
  max-width: 400px;
  margin: 0 auto;
}
.card-footer {
  margin-top: 20px;
  text-align: right;
}
</style>"#;

const FORM_COMPONENT: &str = r#"<template>
  <el-form :model="form" label-width="80px" class="form-component">
    <el-form-item label="Username">
      <el-input v-model="form.username" :placeholder="usernamePlaceholder" />
    </el-form-item>
    <el-form-item label="Email">
      <el-input v-model="form.email" :placeholder="emailPlaceholder" />
    </el-form-item>
    <el-form-item>
      <el-button type="primary" @click="handleSubmit">{{ submitText }}</el-button>
    </el-form-item>
  </el-form>
</template>

<script setup>
import { reactive } from 'vue'

const props = defineProps({
  usernamePlaceholder: {
    type: String,
    default: 'Enter a username'
  },
  emailPlaceholder: {
    type: String,
    default: 'Enter an email address'
  },
  submitText: {
    type: String,
    default: 'Submit'
  }
})

const emit = defineEmits(['submit'])

const form = reactive({
  username: '',
  email: ''
})

const handleSubmit = () => {
  emit('submit', form)
}
</script>

<style scoped>
.form-component {
  max-width: 500px;
  margin: 0 auto;
  padding: 20px;
}
</style>"#;

const BLANK_COMPONENT: &str = r#"<template>
  <div class="custom-component">
    <!-- Template goes here -->
  </div>
</template>

<script setup>
import { ref } from 'vue'

// Logic goes here
</script>

<style scoped>
/* Styles go here */
</style>"#;

const EXAMPLE_COMPONENT: &str = r#"<template>
  <div class="custom-component">
    <h1>{{ title }}</h1>
    <p>{{ description }}</p>

    <div class="counter-section">
      <h3>Counter</h3>
      <p>Count: {{ count }}</p>
      <button @click="increment">Increment</button>
      <button @click="decrement">Decrement</button>
    </div>

    <div class="computed-section">
      <h3>Computed values</h3>
      <p>Double: {{ doubleCount }}</p>
      <p>Status: {{ countStatus }}</p>
    </div>

    <div class="event-section">
      <h3>Events</h3>
      <input v-model="inputText" placeholder="Type something..." />
      <button @click="handleSubmit">Submit</button>
      <p v-if="submittedText">You typed: {{ submittedText }}</p>
    </div>
  </div>
</template>

<script setup>
import { ref, computed, watch } from 'vue'

const title = ref('Vue 3 Composition API')
const description = ref('Build your component from scratch')

const count = ref(0)
const increment = () => count.value++
const decrement = () => count.value--

const doubleCount = computed(() => count.value * 2)
const countStatus = computed(() =>
  count.value === 0 ? 'zero' :
  count.value > 0 ? 'positive' : 'negative'
)

const inputText = ref('')
const submittedText = ref('')

const handleSubmit = () => {
  submittedText.value = inputText.value
  inputText.value = ''
}

watch(count, (newVal, oldVal) => {
  console.log(`count changed from ${oldVal} to ${newVal}`)
})
</script>

<style scoped>
.custom-component {
  padding: 20px;
  font-family: Arial, sans-serif;
  max-width: 600px;
  margin: 0 auto;
}

h1 {
  color: #333;
  margin: 0 0 10px 0;
}

.counter-section,
.computed-section,
.event-section {
  margin: 20px 0;
  padding: 15px;
  border: 1px solid #e0e0e0;
  border-radius: 8px;
}

button {
  background-color: #007bff;
  color: white;
  border: none;
  padding: 8px 16px;
  margin: 0 5px;
  border-radius: 4px;
  cursor: pointer;
}

button:hover {
  background-color: #0056b3;
}
</style>"#;

/// The built-in templates, each with a fresh id.
pub fn builtin_templates() -> Vec<Template> {
    vec![
        Template::new(
            DEFAULT_TEMPLATE_NAME,
            "Vue 3 component with basic props",
            BASIC_COMPONENT,
        ),
        Template::new(
            "Card Component",
            "Element Plus card example",
            CARD_COMPONENT,
        ),
        Template::new(
            "Form Component",
            "Form with inputs and a submit button",
            FORM_COMPONENT,
        ),
    ]
}

/// An empty Composition API component.
pub fn blank_template() -> Template {
    Template::new("Blank", "Empty Composition API component", BLANK_COMPONENT)
}

/// A Composition API component showing refs, computed values and events.
pub fn example_template() -> Template {
    Template::new(
        "Example",
        "Composition API walkthrough with state, computed values and events",
        EXAMPLE_COMPONENT,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sfc_extract::{PropertyDescriptor, StyleBlock};

    #[test]
    fn test_builtin_names() {
        let names: Vec<_> = builtin_templates().into_iter().map(|t| t.name).collect();
        assert_eq!(
            names,
            vec!["Basic Component", "Card Component", "Form Component"]
        );
    }

    #[test]
    fn test_builtins_expose_three_string_props() {
        for template in builtin_templates() {
            let result = template.parse();
            assert_eq!(result.properties.len(), 3, "{}", template.name);
            assert!(result.properties.iter().all(|p| p.has_default()));
            assert_eq!(result.styles.len(), 1);
            assert!(result.styles[0].scoped);
        }
    }

    #[test]
    fn test_basic_component_props() {
        let basic = builtin_templates().remove(0);
        assert_eq!(
            basic.parse().properties,
            vec![
                PropertyDescriptor::string("title", "Title"),
                PropertyDescriptor::string("description", "This is a description"),
                PropertyDescriptor::string("buttonText", "Click me"),
            ]
        );
    }

    #[test]
    fn test_blank_template_has_no_props() {
        let result = blank_template().parse();
        assert!(result.properties.is_empty());
        assert_eq!(result.styles, vec![StyleBlock::scoped("/* Styles go here */")]);
    }

    #[test]
    fn test_example_template_parses() {
        let result = example_template().parse();
        assert!(result.properties.is_empty());
        assert_eq!(result.styles.len(), 1);
    }
}
